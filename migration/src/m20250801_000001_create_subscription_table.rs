use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Subscription::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Subscription::Id)
                            .integer()
                            .not_null()
                            .auto_increment() // SERIAL
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Subscription::UserId).integer().not_null())
                    .col(
                        ColumnDef::new(Subscription::Name)
                            .string_len(128)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Subscription::Provider)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Subscription::ExpirationDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Subscription::Status)
                            .string_len(32)
                            .not_null()
                            .default("ACTIVE"),
                    )
                    .to_owned(),
            )
            .await?;

        // 所有者単位の検索用インデックス
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(Subscription::Table)
                    .name("idx_subscription_user_id")
                    .col(Subscription::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_subscription_user_id")
                    .table(Subscription::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Subscription::Table).to_owned())
            .await
    }
}

/// Iden Enum for the 'subscription' table and its columns
#[derive(DeriveIden)]
enum Subscription {
    Table,
    Id,
    UserId,
    Name,
    Provider,
    ExpirationDate,
    Status,
}
