//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（StudentRepository）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    CreateStudent, DeleteAllStudents, DeleteStudent, UpdateStudent,
    // Handlers
    handlers::{
        CreateStudentHandler, DeleteAllStudentsHandler, DeleteStudentHandler, UpdateStudentHandler,
    },
};

pub use error::ApplicationError;

pub use ports::{RepositoryError, StudentRecord, StudentRepositoryPort};

pub use queries::{
    GetStudent, ListStudents,
    // Handlers
    handlers::{GetStudentHandler, ListStudentsHandler},
};
