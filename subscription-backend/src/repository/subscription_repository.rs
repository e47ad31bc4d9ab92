// src/repository/subscription_repository.rs

use crate::domain::subscription::Subscription;
use crate::domain::subscription_model::{
    self, ActiveModel as SubscriptionActiveModel, Entity as SubscriptionEntity,
};
use crate::error::AppResult;
use crate::repository::subscription_gateway::SubscriptionGateway;
use async_trait::async_trait;
use sea_orm::entity::*;
use sea_orm::{ActiveValue::NotSet, DbConn, QueryFilter, QueryOrder};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct SubscriptionRepository {
    db: DbConn,
}

impl SubscriptionRepository {
    /// スキーマは接続オプションの search_path で解決される（`db::create_db_pool`）
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    // --- 基本CRUD操作 ---

    pub async fn find_all(&self) -> AppResult<Vec<Subscription>> {
        SubscriptionEntity::find()
            .order_by_asc(subscription_model::Column::Id)
            .all(&self.db)
            .await?
            .into_iter()
            .map(Subscription::try_from)
            .collect()
    }

    /// 常に新しい行として挿入する（IDはDBが採番）
    pub async fn insert(&self, subscription: &Subscription) -> AppResult<Subscription> {
        let mut active_model = SubscriptionActiveModel::from(subscription);
        active_model.id = NotSet;

        let model = active_model.insert(&self.db).await?;
        Subscription::try_from(model)
    }

    /// IDが一致する行を更新。該当行がなければfalse
    pub async fn update(&self, subscription: &Subscription) -> AppResult<bool> {
        let Some(id) = subscription.id() else {
            return Ok(false);
        };

        let mut active_model = SubscriptionActiveModel::from(subscription);
        active_model.id = NotSet;

        let result = SubscriptionEntity::update_many()
            .set(active_model)
            .filter(subscription_model::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// 削除した行があればtrue
    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = SubscriptionEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}

#[async_trait]
impl SubscriptionGateway for SubscriptionRepository {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Subscription>> {
        let model = SubscriptionEntity::find_by_id(id).one(&self.db).await?;

        debug!(subscription_id = id, found = model.is_some(), "Loaded subscription");

        model.map(Subscription::try_from).transpose()
    }

    async fn find_by_user_id(&self, user_id: i32) -> AppResult<Vec<Subscription>> {
        let models = SubscriptionEntity::find()
            .filter(subscription_model::Column::UserId.eq(user_id))
            .order_by_asc(subscription_model::Column::Id)
            .all(&self.db)
            .await?;

        debug!(user_id, count = models.len(), "Loaded subscriptions for user");

        models.into_iter().map(Subscription::try_from).collect()
    }

    async fn upsert(&self, subscription: &Subscription) -> AppResult<Subscription> {
        if subscription.id().is_none() {
            return self.insert(subscription).await;
        }

        // ID付きは既存行の更新のみ。該当行がなければ DbErr::RecordNotUpdated
        let model = SubscriptionActiveModel::from(subscription)
            .update(&self.db)
            .await?;

        Subscription::try_from(model)
    }
}
