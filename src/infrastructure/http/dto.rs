//! Data Transfer Objects

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use crate::application::StudentRecord;

// ============================================================================
// Student DTOs
// ============================================================================

/// 创建/更新学生请求体
///
/// 缺失或为 null 的字段按零值处理，交给必填校验报告；`id` 被忽略
#[derive(Debug, Default, Deserialize)]
pub struct StudentRequest {
    #[serde(default, alias = "Name")]
    pub name: Option<String>,
    #[serde(default, alias = "Email")]
    pub email: Option<String>,
    #[serde(default, alias = "Age")]
    pub age: Option<i64>,
}

impl StudentRequest {
    /// 解析请求体：空 body 与 JSON 格式错误是两种不同的错误
    ///
    /// 只读取第一个 JSON 值，其后的内容忽略；`null` 视为所有字段缺失
    pub fn decode(body: &[u8]) -> Result<Self, ApiError> {
        let mut values = serde_json::Deserializer::from_slice(body).into_iter::<Option<Self>>();

        match values.next() {
            None => Err(ApiError::empty_body()),
            Some(Ok(request)) => Ok(request.unwrap_or_default()),
            Some(Err(e)) => Err(ApiError::BadRequest(format!("decode error: {}", e))),
        }
    }

    /// 拆成 (name, email, age)，缺失字段取零值
    pub fn into_parts(self) -> (String, String, i64) {
        (
            self.name.unwrap_or_default(),
            self.email.unwrap_or_default(),
            self.age.unwrap_or_default(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i64,
}

impl From<StudentRecord> for StudentResponse {
    fn from(record: StudentRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
            age: record.age,
        }
    }
}

/// 创建成功响应
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: i64,
}

/// 解析路径中的学生 id
pub fn parse_student_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::BadRequest(format!("invalid id: {}", raw)))
}

/// 路径中的学生 id
///
/// 非数字或无法按 UTF-8 解码的 id 都返回 400 错误信封
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudentId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for StudentId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(raw)) => parse_student_id(&raw).map(StudentId),
            Err(_) => {
                let raw = parts.uri.path().rsplit('/').next().unwrap_or_default();
                Err(ApiError::BadRequest(format!("invalid id: {}", raw)))
            }
        }
    }
}
