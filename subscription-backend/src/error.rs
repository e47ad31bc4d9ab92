// src/error.rs

use crate::validator::ValidationResult;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DbErr(#[from] DbErr),

    #[error("Validation failed: {0}")]
    ValidationFailure(ValidationResult),

    #[error("Subscription {0} not found")]
    NotFound(i32),

    #[error("Subscription {0} has already expired")]
    AlreadyExpired(i32),

    #[error("Only active subscription {0} can be canceled")]
    NotCancelable(i32),

    #[error("Invalid stored data: {0}")]
    InvalidData(String),
}

impl AppError {
    /// ビジネスルール違反かどうか（インフラ障害はfalse）
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            AppError::ValidationFailure(_)
                | AppError::NotFound(_)
                | AppError::AlreadyExpired(_)
                | AppError::NotCancelable(_)
        )
    }

    /// エラーが参照しているサブスクリプションID
    pub fn subscription_id(&self) -> Option<i32> {
        match self {
            AppError::NotFound(id) | AppError::AlreadyExpired(id) | AppError::NotCancelable(id) => {
                Some(*id)
            }
            _ => None,
        }
    }

    pub fn validation_result(&self) -> Option<&ValidationResult> {
        match self {
            AppError::ValidationFailure(result) => Some(result),
            _ => None,
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::DbErr(_) => "database_error",
            AppError::ValidationFailure(_) => "validation_failure",
            AppError::NotFound(_) => "not_found",
            AppError::AlreadyExpired(_) => "already_expired",
            AppError::NotCancelable(_) => "not_cancelable",
            AppError::InvalidData(_) => "invalid_data",
        }
    }
}

// Result 型のエイリアス
pub type AppResult<T> = Result<T, AppError>;
