use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WalletTransaction::Table)
                    .if_not_exists()
                    .col(pk_auto(WalletTransaction::Id))
                    .col(string(WalletTransaction::AccountId))
                    .col(string(WalletTransaction::Kind))
                    .col(big_integer(WalletTransaction::Amount))
                    .col(string_null(WalletTransaction::Source))
                    .col(string_null(WalletTransaction::SourceRef))
                    .col(string(WalletTransaction::Initiator))
                    .col(text(WalletTransaction::Comment))
                    .col(
                        timestamp(WalletTransaction::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_wallet_transaction_account_id")
                            .from(WalletTransaction::Table, WalletTransaction::AccountId)
                            .to(User::Table, User::DiscordId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One payout per ledger row: NULL pairs (manual adjustments,
        // withdrawals) never collide under SQL unique-index semantics.
        manager
            .create_index(
                Index::create()
                    .name("idx_wallet_transaction_source_ref")
                    .table(WalletTransaction::Table)
                    .col(WalletTransaction::Source)
                    .col(WalletTransaction::SourceRef)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WalletTransaction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WalletTransaction {
    Table,
    Id,
    AccountId,
    Kind,
    Amount,
    Source,
    SourceRef,
    Initiator,
    Comment,
    CreatedAt,
}
