use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PayoutCommand::Table)
                    .if_not_exists()
                    .col(pk_auto(PayoutCommand::Id))
                    .col(string(PayoutCommand::MinecraftName))
                    .col(big_integer(PayoutCommand::Amount))
                    .col(
                        timestamp(PayoutCommand::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PayoutCommand::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PayoutCommand {
    Table,
    Id,
    MinecraftName,
    Amount,
    CreatedAt,
}
