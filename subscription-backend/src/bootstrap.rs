// src/bootstrap.rs

use crate::config::AppConfig;
use crate::db::{create_db_pool, create_schema, DbPool};
use crate::error::AppResult;
use crate::mapper::CreateSubscriptionMapper;
use crate::repository::{SubscriptionGateway, SubscriptionRepository};
use crate::service::subscription_service::SubscriptionService;
use crate::utils::clock::{Clock, SystemClock};
use crate::validator::CreateSubscriptionValidator;
use migration::Migrator;
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;
use tracing::info;

/// 設定からDB接続とサービス一式を組み立てる
pub async fn build_subscription_service(config: &AppConfig) -> AppResult<SubscriptionService> {
    let db_pool = connect(config).await?;
    info!(environment = %config.environment, "Database pool created successfully.");

    Ok(wire_subscription_service(
        Arc::new(SubscriptionRepository::new(db_pool)),
        Arc::new(SystemClock),
    ))
}

/// ゲートウェイと時計からサービスを組み立てる
pub fn wire_subscription_service(
    gateway: Arc<dyn SubscriptionGateway>,
    clock: Arc<dyn Clock>,
) -> SubscriptionService {
    SubscriptionService::new(
        gateway,
        CreateSubscriptionMapper::new(),
        CreateSubscriptionValidator::new(clock.clone()),
        clock,
    )
}

async fn connect(config: &AppConfig) -> AppResult<DbPool> {
    let db_pool = create_db_pool(&config.database).await?;

    if let Some(schema) = &config.database.schema {
        info!("Using schema: {}", schema);
        create_schema(&db_pool, schema).await?;
    }

    if config.database.run_migrations {
        info!("Applying pending migrations");
        Migrator::up(&db_pool, None).await?;
    }

    Ok(db_pool)
}
