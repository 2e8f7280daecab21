//! Wallet data repository: balances, the audit trail, and the payout queue.
//!
//! Every balance change in the application funnels through [`WalletRepository::apply`]
//! or [`WalletRepository::withdraw`]. Both wrap the same primitive: inside one
//! database transaction the balance row is read under an exclusive row lock
//! (created at zero if the account has no wallet yet), the new balance is
//! written, and the audit record is inserted. Either everything commits or
//! nothing does, so a wallet's balance always equals the sum of its
//! transaction amounts.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::{
    error::{wallet::WalletError, AppError},
    model::wallet::{
        ApplyTransactionParam, GetHistoryParam, PaginatedTransactions, TransactionKind,
        TransactionSource, WalletTransaction, WithdrawParam,
    },
};

/// Repository providing database operations for wallets and their audit trail.
pub struct WalletRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WalletRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Applies one balance change atomically.
    ///
    /// Opens a database transaction, applies the balance write and the audit
    /// insert, and commits. Any failure rolls both writes back.
    ///
    /// # Arguments
    /// - `param` - The change to apply (signed amount, kind, source, comment)
    ///
    /// # Returns
    /// - `Ok(WalletTransaction)` - The recorded audit entry
    /// - `Err(AppError::WalletErr(InsufficientFunds))` - Debit would take the
    ///   balance below zero; nothing was written
    /// - `Err(AppError)` - Database error; nothing was written
    pub async fn apply(&self, param: ApplyTransactionParam) -> Result<WalletTransaction, AppError> {
        let txn = self.db.begin().await?;

        let entity = Self::apply_on(&txn, &param).await?;

        txn.commit().await?;

        WalletTransaction::from_entity(entity)
    }

    /// Withdraws from a wallet and queues the in-game payout atomically.
    ///
    /// The debit, the audit record, and the payout command are written in one
    /// database transaction; a failure anywhere rolls all three back. Minimum
    /// checks are the service layer's concern.
    ///
    /// # Arguments
    /// - `param` - Account, positive amount, target Minecraft name, initiator
    ///
    /// # Returns
    /// - `Ok(WalletTransaction)` - The recorded debit
    /// - `Err(AppError::WalletErr(InsufficientFunds))` - Balance too low; nothing written
    /// - `Err(AppError)` - Database error; nothing written
    pub async fn withdraw(&self, param: WithdrawParam) -> Result<WalletTransaction, AppError> {
        let txn = self.db.begin().await?;

        let entity = Self::apply_on(
            &txn,
            &ApplyTransactionParam {
                account_id: param.account_id,
                kind: TransactionKind::Withdrawal,
                amount: -param.amount,
                source: None,
                initiator: param.initiator.clone(),
                comment: format!("Withdrawal of {} to {}", param.amount, param.minecraft_name),
            },
        )
        .await?;

        entity::payout_command::ActiveModel {
            id: ActiveValue::NotSet,
            minecraft_name: ActiveValue::Set(param.minecraft_name),
            amount: ActiveValue::Set(param.amount),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        WalletTransaction::from_entity(entity)
    }

    /// The shared balance-change primitive, running on an open transaction.
    ///
    /// Reads the balance under an exclusive row lock so a concurrent change to
    /// the same wallet on another connection waits for this transaction to
    /// finish. A wallet row is created at zero balance on an account's first
    /// credit.
    async fn apply_on<C: ConnectionTrait>(
        conn: &C,
        param: &ApplyTransactionParam,
    ) -> Result<entity::wallet_transaction::Model, AppError> {
        let account_id = param.account_id.to_string();

        let wallet = entity::prelude::Wallet::find_by_id(account_id.clone())
            .lock_exclusive()
            .one(conn)
            .await?;

        let balance = wallet.as_ref().map(|w| w.balance).unwrap_or(0);
        let new_balance = balance + param.amount;

        if new_balance < 0 {
            return Err(WalletError::InsufficientFunds {
                balance,
                requested: -param.amount,
            }
            .into());
        }

        match wallet {
            Some(_) => {
                entity::wallet::ActiveModel {
                    account_id: ActiveValue::Unchanged(account_id.clone()),
                    balance: ActiveValue::Set(new_balance),
                }
                .update(conn)
                .await?;
            }
            None => {
                entity::wallet::ActiveModel {
                    account_id: ActiveValue::Set(account_id.clone()),
                    balance: ActiveValue::Set(new_balance),
                }
                .insert(conn)
                .await?;
            }
        }

        let (source, source_ref) = match &param.source {
            Some(origin) => (
                Some(origin.source.as_str().to_string()),
                Some(origin.reference.clone()),
            ),
            None => (None, None),
        };

        let transaction = entity::wallet_transaction::ActiveModel {
            id: ActiveValue::NotSet,
            account_id: ActiveValue::Set(account_id),
            kind: ActiveValue::Set(param.kind.as_str().to_string()),
            amount: ActiveValue::Set(param.amount),
            source: ActiveValue::Set(source),
            source_ref: ActiveValue::Set(source_ref),
            initiator: ActiveValue::Set(param.initiator.clone()),
            comment: ActiveValue::Set(param.comment.clone()),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(conn)
        .await?;

        Ok(transaction)
    }

    /// Checks whether a ledger row has already been paid out.
    ///
    /// Matches on the structural (`source`, `source_ref`) pair, never on the
    /// display comment, so rewording comments cannot break idempotency.
    ///
    /// # Returns
    /// - `Ok(true)` - A transaction generated from this row exists
    /// - `Ok(false)` - The row has not been paid out
    /// - `Err(AppError)` - Database error during query
    pub async fn transaction_exists(&self, origin: &TransactionSource) -> Result<bool, AppError> {
        let count = entity::prelude::WalletTransaction::find()
            .filter(entity::wallet_transaction::Column::Source.eq(origin.source.as_str()))
            .filter(entity::wallet_transaction::Column::SourceRef.eq(origin.reference.clone()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets an account's current balance.
    ///
    /// Accounts without a wallet row have never been credited and report zero.
    ///
    /// # Returns
    /// - `Ok(balance)` - Current balance (0 if no wallet row exists)
    /// - `Err(AppError)` - Database error during query
    pub async fn get_balance(&self, account_id: u64) -> Result<i64, AppError> {
        let wallet = entity::prelude::Wallet::find_by_id(account_id.to_string())
            .one(self.db)
            .await?;

        Ok(wallet.map(|w| w.balance).unwrap_or(0))
    }

    /// Gets an account's transaction history with pagination, newest first.
    ///
    /// # Arguments
    /// - `param` - Account, zero-indexed page number, page size
    ///
    /// # Returns
    /// - `Ok(PaginatedTransactions)` - Records for the requested page plus totals
    /// - `Err(AppError)` - Database error during pagination query
    pub async fn get_history_paginated(
        &self,
        param: &GetHistoryParam,
    ) -> Result<PaginatedTransactions, AppError> {
        let paginator = entity::prelude::WalletTransaction::find()
            .filter(
                entity::wallet_transaction::Column::AccountId.eq(param.account_id.to_string()),
            )
            .order_by_desc(entity::wallet_transaction::Column::CreatedAt)
            .order_by_desc(entity::wallet_transaction::Column::Id)
            .paginate(self.db, param.per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(param.page).await?;
        let transactions = entities
            .into_iter()
            .map(WalletTransaction::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        let total_pages = total.div_ceil(param.per_page.max(1));

        Ok(PaginatedTransactions {
            transactions,
            total,
            page: param.page,
            per_page: param.per_page,
            total_pages,
        })
    }
}
