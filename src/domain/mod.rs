//! Domain Layer - 领域层
//!
//! 包含一个限界上下文:
//! - Student Context: 学生资料管理

pub mod student;
