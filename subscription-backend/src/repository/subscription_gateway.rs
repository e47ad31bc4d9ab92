//! Persistence contract consumed by the lifecycle service.

use async_trait::async_trait;

use crate::domain::subscription::Subscription;
use crate::error::AppResult;

/// Subscription persistence gateway
#[async_trait]
pub trait SubscriptionGateway: Send + Sync {
    /// Find a subscription by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Subscription>>;

    /// Find all subscriptions owned by a user (order is not significant)
    async fn find_by_user_id(&self, user_id: i32) -> AppResult<Vec<Subscription>>;

    /// Insert when the entity has no ID, otherwise update the row with that ID.
    /// An ID with no matching row is an error (`DbErr::RecordNotUpdated`), never an insert.
    /// Returns the stored entity with its ID populated.
    async fn upsert(&self, subscription: &Subscription) -> AppResult<Subscription>;
}
