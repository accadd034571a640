//! Infrastructure Layer - 基础设施层
//!
//! 提供所有端口的具体实现

pub mod http;
pub mod memory;
pub mod persistence;

pub use memory::InMemoryStudentRepository;
pub use persistence::sqlite::SqliteStudentRepository;
