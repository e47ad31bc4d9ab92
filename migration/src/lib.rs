// migration/src/lib.rs
pub use sea_orm_migration::prelude::*;

// サブスクリプション関連マイグレーション
mod m20250801_000001_create_subscription_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            // 1. サブスクリプションテーブル作成（所有者インデックス込み）
            Box::new(m20250801_000001_create_subscription_table::Migration),
        ]
    }
}
