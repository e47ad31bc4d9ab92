// subscription-backend/src/service/subscription_service.rs

use crate::api::dto::subscription_dto::CreateSubscriptionDto;
use crate::domain::subscription::Subscription;
use crate::error::{AppError, AppResult};
use crate::log_with_context;
use crate::mapper::CreateSubscriptionMapper;
use crate::repository::SubscriptionGateway;
use crate::utils::clock::Clock;
use crate::validator::CreateSubscriptionValidator;
use std::sync::Arc;
use tracing::{info, instrument};

/// サブスクリプションのライフサイクル（作成・再開・期限切れ・キャンセル）を管理する
#[derive(Clone)]
pub struct SubscriptionService {
    gateway: Arc<dyn SubscriptionGateway>,
    mapper: CreateSubscriptionMapper,
    validator: CreateSubscriptionValidator,
    clock: Arc<dyn Clock>,
}

impl SubscriptionService {
    pub fn new(
        gateway: Arc<dyn SubscriptionGateway>,
        mapper: CreateSubscriptionMapper,
        validator: CreateSubscriptionValidator,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            gateway,
            mapper,
            validator,
            clock,
        }
    }

    /// サブスクリプションを作成、または同じ (user_id, name) の既存レコードを再開する
    ///
    /// 既存レコードを再開する場合、リクエストの他のフィールド（プロバイダー・期限）は反映しない。
    #[instrument(skip(self, dto), fields(user_id = ?dto.user_id))]
    pub async fn upsert(&self, dto: &CreateSubscriptionDto) -> AppResult<Subscription> {
        let validation = self.validator.validate(dto);
        if validation.has_errors() {
            log_with_context!(
                tracing::Level::WARN,
                "Subscription request rejected by validation",
                "codes" => validation.codes(),
            );
            return Err(AppError::ValidationFailure(validation));
        }

        // 検証を通過した入力は必ず写像できる
        let candidate = self.mapper.map(dto).ok_or_else(|| {
            AppError::InvalidData("validated request could not be mapped".to_string())
        })?;

        let merge_target = self
            .gateway
            .find_by_user_id(candidate.user_id())
            .await?
            .into_iter()
            .find(|existing| existing.name() == candidate.name());

        let (subscription, reactivated) = match merge_target {
            Some(mut existing) => {
                existing.activate();
                (existing, true)
            }
            None => (candidate, false),
        };

        let saved = self.gateway.upsert(&subscription).await?;

        info!(
            subscription_id = ?saved.id(),
            user_id = saved.user_id(),
            name = %saved.name(),
            reactivated,
            "Subscription upserted"
        );

        Ok(saved)
    }

    /// サブスクリプションを期限切れにする（期限はサービスの時計の現在時刻）
    #[instrument(skip(self))]
    pub async fn expire(&self, id: i32) -> AppResult<()> {
        let mut subscription = self.find_subscription(id).await?;

        if !subscription.status().can_expire() {
            log_with_context!(
                tracing::Level::WARN,
                "Rejected expire on already expired subscription",
                "subscription_id" => id,
            );
            return Err(AppError::AlreadyExpired(id));
        }

        subscription.expire_at(self.clock.now());
        self.gateway.upsert(&subscription).await?;

        info!(
            subscription_id = id,
            expiration_date = %subscription.expiration_date(),
            "Subscription expired"
        );

        Ok(())
    }

    /// ACTIVEなサブスクリプションのみキャンセルできる
    #[instrument(skip(self))]
    pub async fn cancel(&self, id: i32) -> AppResult<()> {
        let mut subscription = self.find_subscription(id).await?;

        if !subscription.status().can_cancel() {
            log_with_context!(
                tracing::Level::WARN,
                "Rejected cancel on inactive subscription",
                "subscription_id" => id,
                "status" => subscription.status(),
            );
            return Err(AppError::NotCancelable(id));
        }

        subscription.cancel();
        self.gateway.upsert(&subscription).await?;

        info!(subscription_id = id, "Subscription canceled");

        Ok(())
    }

    async fn find_subscription(&self, id: i32) -> AppResult<Subscription> {
        self.gateway
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound(id))
    }
}
