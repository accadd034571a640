//! Student Context - Errors

use std::fmt;

use thiserror::Error;

/// 字段校验规则
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// 必填（空字符串 / 0 视为缺失）
    Required,
    /// 其余规则，报告为 "field X is invalid"；当前的学生规则都是必填检查
    Invalid,
}

/// 单个字段的校验失败
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub rule: FieldRule,
}

impl FieldViolation {
    pub fn required(field: &'static str) -> Self {
        Self {
            field,
            rule: FieldRule::Required,
        }
    }

    pub fn invalid(field: &'static str) -> Self {
        Self {
            field,
            rule: FieldRule::Invalid,
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rule {
            FieldRule::Required => write!(f, "field {} is required", self.field),
            FieldRule::Invalid => write!(f, "field {} is invalid", self.field),
        }
    }
}

/// 一次校验中收集到的全部失败字段，按字段声明顺序排列
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldViolations(Vec<FieldViolation>);

impl FieldViolations {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, violation: FieldViolation) {
        self.0.push(violation);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldViolation> {
        self.0.iter()
    }
}

impl fmt::Display for FieldViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", violation)?;
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum StudentError {
    #[error("{0}")]
    Validation(FieldViolations),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_messages() {
        assert_eq!(
            FieldViolation::required("Name").to_string(),
            "field Name is required"
        );
        assert_eq!(
            FieldViolation::invalid("Email").to_string(),
            "field Email is invalid"
        );
    }

    #[test]
    fn test_violations_joined_with_comma() {
        let mut violations = FieldViolations::new();
        violations.push(FieldViolation::required("Email"));
        violations.push(FieldViolation::invalid("Age"));

        assert_eq!(
            violations.to_string(),
            "field Email is required, field Age is invalid"
        );
    }

    #[test]
    fn test_empty_violations_render_empty() {
        assert_eq!(FieldViolations::new().to_string(), "");
    }
}
