//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（SQLite、内存）

use async_trait::async_trait;
use thiserror::Error;

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl RepositoryError {
    /// 按 id 查询时未命中
    pub fn student_not_found(id: i64) -> Self {
        Self::NotFound(format!("student not found with id {}", id))
    }

    /// 更新时没有任何行被修改
    pub fn no_rows_affected() -> Self {
        Self::NotFound("no rows affected".to_string())
    }
}

/// 学生实体（用于持久化）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i64,
}

/// Student Repository Port
///
/// 存储层信任调用方：字段校验在请求边界完成
#[async_trait]
pub trait StudentRepositoryPort: Send + Sync {
    /// 插入新学生，返回自增 id
    async fn create(&self, name: &str, email: &str, age: i64) -> Result<i64, RepositoryError>;

    /// 根据 id 查找学生，未命中返回 `NotFound`
    async fn find_by_id(&self, id: i64) -> Result<StudentRecord, RepositoryError>;

    /// 获取所有学生（存储自然顺序），空表返回空列表
    async fn find_all(&self) -> Result<Vec<StudentRecord>, RepositoryError>;

    /// 覆盖 name/email/age，没有匹配行时返回 `NotFound`
    ///
    /// 返回值由入参重建，不回读存储
    async fn update(
        &self,
        id: i64,
        name: &str,
        email: &str,
        age: i64,
    ) -> Result<StudentRecord, RepositoryError>;

    /// 删除学生（幂等，不检查是否存在）
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;

    /// 删除所有学生
    async fn delete_all(&self) -> Result<(), RepositoryError>;
}
