//! Create `service_types` table.
//! `category` holds the enum variant name, so it stays a plain string column.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceTypes::Table)
                    .if_not_exists()
                    .col(big_integer(ServiceTypes::Id).auto_increment().primary_key().take())
                    .col(string_len(ServiceTypes::ServiceName, 100).not_null())
                    .col(string_len_null(ServiceTypes::Description, 500))
                    .col(string_len_null(ServiceTypes::Category, 50))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ServiceTypes::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ServiceTypes { Table, Id, ServiceName, Description, Category }
