use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    // The table lives in the application database but its rows are written
    // by the anti-cheat plugin on the game server; this application only
    // reads them.
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CheckLog::Table)
                    .if_not_exists()
                    .col(timestamp(CheckLog::Date).primary_key())
                    .col(string(CheckLog::CheckerName))
                    .col(string(CheckLog::TargetName))
                    .col(string(CheckLog::CheckType))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CheckLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CheckLog {
    Table,
    Date,
    CheckerName,
    TargetName,
    CheckType,
}
