use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(JobState::Table)
                    .if_not_exists()
                    .col(string(JobState::Key).primary_key())
                    .col(string(JobState::Value))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(JobState::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum JobState {
    Table,
    Key,
    Value,
}
