//! Student Queries

/// 获取学生详情查询
#[derive(Debug, Clone)]
pub struct GetStudent {
    pub student_id: i64,
}

/// 列出所有学生查询
#[derive(Debug, Clone)]
pub struct ListStudents;
