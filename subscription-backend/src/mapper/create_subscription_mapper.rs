// src/mapper/create_subscription_mapper.rs

use crate::api::dto::subscription_dto::CreateSubscriptionDto;
use crate::domain::subscription::Subscription;
use crate::domain::subscription_provider::SubscriptionProvider;

/// 検証済みリクエストから未保存のサブスクリプションを組み立てる
#[derive(Debug, Clone, Copy, Default)]
pub struct CreateSubscriptionMapper;

impl CreateSubscriptionMapper {
    pub fn new() -> Self {
        Self
    }

    /// フィールドをそのまま写し、ステータスはACTIVEに固定する。
    ///
    /// 入力は事前にバリデータを通過している前提。必須フィールドが欠けていれば `None`。
    pub fn map(&self, dto: &CreateSubscriptionDto) -> Option<Subscription> {
        let provider = SubscriptionProvider::from_tag(dto.provider.as_deref()?)?;

        Some(Subscription::new(
            dto.user_id?,
            dto.name.clone()?,
            provider,
            dto.expiration_date?,
        ))
    }
}
