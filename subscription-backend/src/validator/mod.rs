// src/validator/mod.rs

//! 入力バリデーション
//!
//! 各ルールは独立に評価され、違反はすべて一つの `ValidationResult` に集約される。

pub mod create_subscription_validator;

pub use create_subscription_validator::CreateSubscriptionValidator;

use serde::Serialize;
use std::fmt;

/// 違反したルールを表す安定したエラーコード
pub mod codes {
    pub const USER_ID_INVALID: i32 = 100;
    pub const NAME_INVALID: i32 = 101;
    pub const PROVIDER_INVALID: i32 = 102;
    pub const EXPIRATION_DATE_INVALID: i32 = 103;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub code: i32,
    pub message: String,
}

impl ValidationError {
    pub fn of(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

/// 検証結果（空なら有効）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn codes(&self) -> Vec<i32> {
        self.errors.iter().map(|e| e.code).collect()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        f.write_str(&joined)
    }
}
