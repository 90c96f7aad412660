use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Plans: lookup by name
        manager
            .create_index(
                Index::create()
                    .name("idx_insurance_plans_plan_name")
                    .table(InsurancePlans::Table)
                    .col(InsurancePlans::PlanName)
                    .to_owned(),
            )
            .await?;

        // Service types: lookup by name and by category
        manager
            .create_index(
                Index::create()
                    .name("idx_service_types_service_name")
                    .table(ServiceTypes::Table)
                    .col(ServiceTypes::ServiceName)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_service_types_category")
                    .table(ServiceTypes::Table)
                    .col(ServiceTypes::Category)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_service_types_category").table(ServiceTypes::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_service_types_service_name").table(ServiceTypes::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_insurance_plans_plan_name").table(InsurancePlans::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum InsurancePlans { Table, PlanName }

#[derive(DeriveIden)]
enum ServiceTypes { Table, ServiceName, Category }
