//! Create `insurance_plans` table.
//!
//! Money columns are `DECIMAL(8,2)`; the id is an auto-increment identity that
//! is never handed out twice.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InsurancePlans::Table)
                    .if_not_exists()
                    .col(big_integer(InsurancePlans::Id).auto_increment().primary_key().take())
                    .col(string_len(InsurancePlans::PlanName, 100).not_null())
                    .col(decimal_len(InsurancePlans::MonthlyPremium, 8, 2).not_null())
                    .col(decimal_len(InsurancePlans::Deductible, 8, 2).not_null())
                    .col(decimal_len(InsurancePlans::OutOfPocketMax, 8, 2).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(InsurancePlans::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum InsurancePlans {
    Table,
    Id,
    PlanName,
    MonthlyPremium,
    Deductible,
    OutOfPocketMax,
}
