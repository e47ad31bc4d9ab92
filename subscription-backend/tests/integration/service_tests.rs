// tests/integration/service_tests.rs
use chrono::{Duration, Utc};
use std::sync::Arc;
use subscription_backend::bootstrap::wire_subscription_service;
use subscription_backend::domain::subscription_status::SubscriptionStatus;
use subscription_backend::repository::{SubscriptionGateway, SubscriptionRepository};
use subscription_backend::utils::clock::SystemClock;
use subscription_backend::{AppError, SubscriptionService};

use crate::common;
use crate::common::test_data::{create_subscription_dto, new_subscription};

async fn setup_test_service() -> (
    common::db::TestDatabase,
    Arc<SubscriptionRepository>,
    SubscriptionService,
) {
    common::init_test_env();
    let db = common::db::TestDatabase::new().await;
    let repo = Arc::new(SubscriptionRepository::new(db.connection.clone()));
    let service = wire_subscription_service(repo.clone(), Arc::new(SystemClock));
    (db, repo, service)
}

#[tokio::test]
async fn test_upsert() {
    let (_db, repo, service) = setup_test_service().await;
    let dto = create_subscription_dto(11, "Music", "APPLE", Utc::now() + Duration::days(10));

    let subscription = service.upsert(&dto).await.unwrap();

    assert!(subscription.id().is_some());
    let stored = repo
        .find_by_id(subscription.id().unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored, subscription);
}

#[tokio::test]
async fn test_upsert_reactivates_stored_subscription() {
    let (_db, repo, service) = setup_test_service().await;
    let existing = repo.insert(&new_subscription(11, "Music")).await.unwrap();
    service.cancel(existing.id().unwrap()).await.unwrap();

    let dto = create_subscription_dto(11, "Music", "GOOGLE", Utc::now() + Duration::days(30));
    let subscription = service.upsert(&dto).await.unwrap();

    assert_eq!(subscription.id(), existing.id());
    assert_eq!(subscription.status(), SubscriptionStatus::Active);
    assert_eq!(subscription.provider(), existing.provider());
    assert_eq!(repo.find_by_user_id(11).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_expire() {
    let (_db, repo, service) = setup_test_service().await;
    let subscription = repo.insert(&new_subscription(1, "Music")).await.unwrap();

    service.expire(subscription.id().unwrap()).await.unwrap();

    let actual = repo
        .find_by_id(subscription.id().unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(actual.status(), SubscriptionStatus::Expired);
    assert_ne!(actual.expiration_date(), subscription.expiration_date());
    assert!(actual.expiration_date() <= Utc::now());

    let err = service.expire(subscription.id().unwrap()).await.unwrap_err();
    assert!(matches!(err, AppError::AlreadyExpired(_)));
}

#[tokio::test]
async fn test_cancel() {
    let (_db, repo, service) = setup_test_service().await;
    let subscription = repo.insert(&new_subscription(1, "Music")).await.unwrap();

    service.cancel(subscription.id().unwrap()).await.unwrap();

    let actual = repo
        .find_by_id(subscription.id().unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(actual.status(), SubscriptionStatus::Canceled);

    let err = service.cancel(subscription.id().unwrap()).await.unwrap_err();
    assert!(matches!(err, AppError::NotCancelable(_)));
}

#[tokio::test]
async fn test_operations_on_missing_subscription() {
    let (_db, _repo, service) = setup_test_service().await;

    assert!(matches!(
        service.expire(1000).await.unwrap_err(),
        AppError::NotFound(1000)
    ));
    assert!(matches!(
        service.cancel(1000).await.unwrap_err(),
        AppError::NotFound(1000)
    ));
}
