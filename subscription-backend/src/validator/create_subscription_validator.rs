// src/validator/create_subscription_validator.rs

use crate::api::dto::subscription_dto::CreateSubscriptionDto;
use crate::domain::subscription_provider::SubscriptionProvider;
use crate::utils::clock::{truncate_to_seconds, Clock};
use crate::validator::{codes, ValidationError, ValidationResult};
use std::sync::Arc;

/// サブスクリプション作成リクエストのバリデータ
///
/// 副作用を持たず、常に結果を返す（エラーで中断しない）。
#[derive(Clone)]
pub struct CreateSubscriptionValidator {
    clock: Arc<dyn Clock>,
}

impl CreateSubscriptionValidator {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    pub fn validate(&self, dto: &CreateSubscriptionDto) -> ValidationResult {
        let mut result = ValidationResult::default();

        if dto.user_id.is_none() {
            result.add(ValidationError::of(
                codes::USER_ID_INVALID,
                "userId is invalid",
            ));
        }

        if !matches!(dto.name.as_deref(), Some(name) if !name.is_empty()) {
            result.add(ValidationError::of(codes::NAME_INVALID, "name is invalid"));
        }

        // タグは完全一致のみ受け付ける
        if dto
            .provider
            .as_deref()
            .and_then(SubscriptionProvider::from_tag)
            .is_none()
        {
            result.add(ValidationError::of(
                codes::PROVIDER_INVALID,
                "provider is invalid",
            ));
        }

        // 保存されるのは秒単位に切り捨てた値なので、その値で判定する
        let now = self.clock.now();
        if !matches!(dto.expiration_date, Some(date) if truncate_to_seconds(date) > now) {
            result.add(ValidationError::of(
                codes::EXPIRATION_DATE_INVALID,
                "expirationDate is invalid",
            ));
        }

        result
    }
}
