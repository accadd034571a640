//! Student Commands

/// 创建学生命令
#[derive(Debug, Clone)]
pub struct CreateStudent {
    pub name: String,
    pub email: String,
    pub age: i64,
}

/// 更新学生命令（整体覆盖 name/email/age）
#[derive(Debug, Clone)]
pub struct UpdateStudent {
    pub student_id: i64,
    pub name: String,
    pub email: String,
    pub age: i64,
}

/// 删除学生命令
#[derive(Debug, Clone)]
pub struct DeleteStudent {
    pub student_id: i64,
}

/// 删除所有学生命令
#[derive(Debug, Clone)]
pub struct DeleteAllStudents;
