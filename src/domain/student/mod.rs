//! Student Context - 学生限界上下文
//!
//! 职责:
//! - 学生资料（name / email / age）的必填校验
//! - 校验错误的统一描述

mod errors;
mod profile;

pub use errors::{FieldRule, FieldViolation, FieldViolations, StudentError};
pub use profile::StudentProfile;
