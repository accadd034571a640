//! Memory Layer - In-Memory Storage
//!
//! 实现 StudentRepositoryPort 的内存版本，用于在没有数据库的情况下驱动处理器

mod student_repo;

pub use student_repo::InMemoryStudentRepository;
