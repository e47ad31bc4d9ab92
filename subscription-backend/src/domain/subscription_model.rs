// subscription-backend/src/domain/subscription_model.rs

use crate::domain::subscription::Subscription;
use crate::domain::subscription_provider::SubscriptionProvider;
use crate::domain::subscription_status::SubscriptionStatus;
use crate::error::AppError;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "subscription")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub provider: String,
    pub expiration_date: DateTime<Utc>,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Subscription {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        // 保存済みタグが列挙外ならデータ破損として扱う
        let provider = SubscriptionProvider::from_tag(&model.provider).ok_or_else(|| {
            AppError::InvalidData(format!(
                "subscription {} has unknown provider '{}'",
                model.id, model.provider
            ))
        })?;
        let status = SubscriptionStatus::from_tag(&model.status).ok_or_else(|| {
            AppError::InvalidData(format!(
                "subscription {} has unknown status '{}'",
                model.id, model.status
            ))
        })?;

        Ok(Subscription::restore(
            model.id,
            model.user_id,
            model.name,
            provider,
            model.expiration_date,
            status,
        ))
    }
}

impl From<&Subscription> for ActiveModel {
    fn from(subscription: &Subscription) -> Self {
        Self {
            // 未採番ならDB側のSERIALに任せる
            id: subscription.id().map_or(NotSet, Set),
            user_id: Set(subscription.user_id()),
            name: Set(subscription.name().to_string()),
            provider: Set(subscription.provider().into()),
            expiration_date: Set(subscription.expiration_date()),
            status: Set(subscription.status().into()),
        }
    }
}
