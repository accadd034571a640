//! Student Context - Profile

use super::{FieldViolation, FieldViolations, StudentError};

/// 已通过必填校验的学生资料（不含 id，id 由存储层分配）
///
/// 不变量:
/// - name、email 非空
/// - age 非 0
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentProfile {
    name: String,
    email: String,
    age: i64,
}

impl StudentProfile {
    /// 校验并创建学生资料
    ///
    /// 失败时按 Email、Name、Age 的顺序返回全部失败字段
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        age: i64,
    ) -> Result<Self, StudentError> {
        let name = name.into();
        let email = email.into();

        let mut violations = FieldViolations::new();
        if email.is_empty() {
            violations.push(FieldViolation::required("Email"));
        }
        if name.is_empty() {
            violations.push(FieldViolation::required("Name"));
        }
        if age == 0 {
            violations.push(FieldViolation::required("Age"));
        }

        if !violations.is_empty() {
            return Err(StudentError::Validation(violations));
        }

        Ok(Self { name, email, age })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn age(&self) -> i64 {
        self.age
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_profile() {
        let profile = StudentProfile::new("Alice", "alice@example.com", 20).unwrap();
        assert_eq!(profile.name(), "Alice");
        assert_eq!(profile.email(), "alice@example.com");
        assert_eq!(profile.age(), 20);
    }

    #[test]
    fn test_empty_name_is_required() {
        let err = StudentProfile::new("", "a@b.com", 5).unwrap_err();
        assert_eq!(err.to_string(), "field Name is required");
    }

    #[test]
    fn test_zero_age_is_required() {
        let err = StudentProfile::new("Bob", "bob@example.com", 0).unwrap_err();
        assert_eq!(err.to_string(), "field Age is required");
    }

    #[test]
    fn test_all_fields_missing_reported_in_order() {
        let StudentError::Validation(violations) = StudentProfile::new("", "", 0).unwrap_err();
        let fields: Vec<_> = violations.iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["Email", "Name", "Age"]);
        assert_eq!(
            violations.to_string(),
            "field Email is required, field Name is required, field Age is required"
        );
    }

    #[test]
    fn test_email_format_not_checked() {
        assert!(StudentProfile::new("Carol", "not-an-email", 30).is_ok());
    }

    #[test]
    fn test_negative_age_accepted() {
        assert!(StudentProfile::new("Dave", "dave@example.com", -1).is_ok());
    }
}
