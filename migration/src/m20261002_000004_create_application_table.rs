use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Application::Table)
                    .if_not_exists()
                    .col(pk_auto(Application::Id))
                    .col(string_uniq(Application::ApplicationId))
                    .col(string_null(Application::AadharNumber).unique_key())
                    .col(string_null(Application::StudentName))
                    .col(string_null(Application::MobileNo))
                    .col(string_null(Application::Gender))
                    .col(json(Application::Details))
                    .col(json(Application::OfficeUseOnly))
                    .col(string(Application::Status))
                    .col(timestamp_with_time_zone(Application::CreatedAt))
                    .col(timestamp_with_time_zone(Application::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Application::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Application {
    Table,
    Id,
    ApplicationId,
    AadharNumber,
    StudentName,
    MobileNo,
    Gender,
    Details,
    OfficeUseOnly,
    Status,
    CreatedAt,
    UpdatedAt,
}
