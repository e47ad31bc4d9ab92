// subscription-backend/src/domain/subscription.rs

//! サブスクリプションのドメイン値
//!
//! `status` と `expiration_date` はライフサイクルサービスの遷移メソッド経由でのみ変更される。

use crate::domain::subscription_provider::SubscriptionProvider;
use crate::domain::subscription_status::SubscriptionStatus;
use crate::utils::clock::truncate_to_seconds;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subscription {
    id: Option<i32>,
    user_id: i32,
    name: String,
    provider: SubscriptionProvider,
    expiration_date: DateTime<Utc>,
    status: SubscriptionStatus,
}

impl Subscription {
    /// 未保存（id未採番）のACTIVEなサブスクリプションを作成
    pub fn new(
        user_id: i32,
        name: String,
        provider: SubscriptionProvider,
        expiration_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: None,
            user_id,
            name,
            provider,
            expiration_date: truncate_to_seconds(expiration_date),
            status: SubscriptionStatus::Active,
        }
    }

    /// 保存済みのサブスクリプションを復元
    pub fn restore(
        id: i32,
        user_id: i32,
        name: String,
        provider: SubscriptionProvider,
        expiration_date: DateTime<Utc>,
        status: SubscriptionStatus,
    ) -> Self {
        Self {
            id: Some(id),
            user_id,
            name,
            provider,
            expiration_date: truncate_to_seconds(expiration_date),
            status,
        }
    }

    pub fn id(&self) -> Option<i32> {
        self.id
    }

    pub fn user_id(&self) -> i32 {
        self.user_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn provider(&self) -> SubscriptionProvider {
        self.provider
    }

    pub fn expiration_date(&self) -> DateTime<Utc> {
        self.expiration_date
    }

    pub fn status(&self) -> SubscriptionStatus {
        self.status
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    // --- 状態遷移（サービス専用） ---

    pub(crate) fn activate(&mut self) {
        self.status = SubscriptionStatus::Active;
    }

    pub(crate) fn expire_at(&mut self, at: DateTime<Utc>) {
        self.status = SubscriptionStatus::Expired;
        self.expiration_date = truncate_to_seconds(at);
    }

    pub(crate) fn cancel(&mut self) {
        self.status = SubscriptionStatus::Canceled;
    }
}
