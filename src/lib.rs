//! Students API - 学生信息 CRUD 服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Student Context: 学生资料及必填校验
//!
//! 应用层 (application/):
//! - Ports: 端口定义（StudentRepository）
//! - Commands: 创建 / 更新 / 删除
//! - Queries: 详情 / 列表
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Persistence: SQLite 存储
//! - Memory: 内存存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;

pub use config::{load_config, AppConfig};
