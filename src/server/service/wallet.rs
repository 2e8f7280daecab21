//! Wallet service for business logic.
//!
//! Validates withdrawal and adjustment requests before handing them to the
//! wallet repository's atomic balance-change primitive. Atomicity itself is
//! the repository's contract; this layer owns the business rules (minimum
//! withdrawal, positive amounts, linked Minecraft name).

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{user::UserRepository, wallet::WalletRepository},
    error::{wallet::WalletError, AppError},
    model::wallet::{
        ApplyTransactionParam, GetHistoryParam, PaginatedTransactions, TransactionKind, Wallet,
        WalletTransaction, WithdrawParam,
    },
};

/// Smallest amount a staff member may withdraw to the in-game currency.
pub const MIN_WITHDRAWAL: i64 = 5000;

/// Service providing business logic for wallets.
pub struct WalletService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> WalletService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves an account's wallet.
    ///
    /// Accounts that were never credited report a zero balance.
    pub async fn get_wallet(&self, account_id: u64) -> Result<Wallet, AppError> {
        let wallet_repo = WalletRepository::new(self.db);
        let balance = wallet_repo.get_balance(account_id).await?;

        Ok(Wallet {
            account_id,
            balance,
        })
    }

    /// Retrieves an account's transaction history, newest first.
    pub async fn get_history(
        &self,
        param: GetHistoryParam,
    ) -> Result<PaginatedTransactions, AppError> {
        let wallet_repo = WalletRepository::new(self.db);
        wallet_repo.get_history_paginated(&param).await
    }

    /// Withdraws from the caller's own wallet.
    ///
    /// Enforces the minimum withdrawal and requires a linked Minecraft name
    /// for the payout command to target. The debit and the queued payout are
    /// atomic; a rejection leaves no trace in the wallet or its history.
    ///
    /// # Returns
    /// - `Ok(WalletTransaction)` - The recorded debit
    /// - `Err(AppError::WalletErr(BelowMinimumWithdrawal))` - Amount below the minimum
    /// - `Err(AppError::WalletErr(MinecraftNameNotLinked))` - No name to pay out to
    /// - `Err(AppError::WalletErr(InsufficientFunds))` - Balance too low
    /// - `Err(AppError)` - Database error
    pub async fn withdraw(
        &self,
        account_id: u64,
        amount: i64,
    ) -> Result<WalletTransaction, AppError> {
        if amount < MIN_WITHDRAWAL {
            return Err(WalletError::BelowMinimumWithdrawal {
                minimum: MIN_WITHDRAWAL,
                requested: amount,
            }
            .into());
        }

        let minecraft_name = self.require_minecraft_name(account_id).await?;

        let wallet_repo = WalletRepository::new(self.db);
        wallet_repo
            .withdraw(WithdrawParam {
                account_id,
                amount,
                minecraft_name,
                initiator: account_id.to_string(),
            })
            .await
    }

    /// Credits another account's wallet on behalf of an admin.
    ///
    /// # Returns
    /// - `Ok(WalletTransaction)` - The recorded credit
    /// - `Err(AppError::WalletErr(NonPositiveAmount))` - Amount not positive
    /// - `Err(AppError::NotFound)` - Target account does not exist
    /// - `Err(AppError)` - Database error
    pub async fn admin_credit(
        &self,
        admin_id: u64,
        target_id: u64,
        amount: i64,
        comment: Option<String>,
    ) -> Result<WalletTransaction, AppError> {
        if amount <= 0 {
            return Err(WalletError::NonPositiveAmount(amount).into());
        }

        self.admin_adjust(admin_id, target_id, amount, comment).await
    }

    /// Debits another account's wallet on behalf of an admin.
    ///
    /// `amount` is the positive number of units to remove.
    ///
    /// # Returns
    /// - `Ok(WalletTransaction)` - The recorded debit
    /// - `Err(AppError::WalletErr(NonPositiveAmount))` - Amount not positive
    /// - `Err(AppError::WalletErr(InsufficientFunds))` - Balance too low
    /// - `Err(AppError::NotFound)` - Target account does not exist
    /// - `Err(AppError)` - Database error
    pub async fn admin_debit(
        &self,
        admin_id: u64,
        target_id: u64,
        amount: i64,
        comment: Option<String>,
    ) -> Result<WalletTransaction, AppError> {
        if amount <= 0 {
            return Err(WalletError::NonPositiveAmount(amount).into());
        }

        self.admin_adjust(admin_id, target_id, -amount, comment).await
    }

    /// Withdraws from another account's wallet on behalf of an admin.
    ///
    /// Skips the minimum-withdrawal check - the minimum throttles staff
    /// self-service, not administrative payouts - but still requires the
    /// target to have a linked Minecraft name and a sufficient balance.
    pub async fn admin_withdraw(
        &self,
        admin_id: u64,
        target_id: u64,
        amount: i64,
    ) -> Result<WalletTransaction, AppError> {
        if amount <= 0 {
            return Err(WalletError::NonPositiveAmount(amount).into());
        }

        let minecraft_name = self.require_minecraft_name(target_id).await?;

        let wallet_repo = WalletRepository::new(self.db);
        wallet_repo
            .withdraw(WithdrawParam {
                account_id: target_id,
                amount,
                minecraft_name,
                initiator: admin_id.to_string(),
            })
            .await
    }

    /// Shared validation and bookkeeping for admin credits and debits.
    ///
    /// `amount` is already signed: positive for credits, negative for debits.
    async fn admin_adjust(
        &self,
        admin_id: u64,
        target_id: u64,
        amount: i64,
        comment: Option<String>,
    ) -> Result<WalletTransaction, AppError> {
        let user_repo = UserRepository::new(self.db);
        if user_repo.find_by_discord_id(target_id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let comment = comment.unwrap_or_else(|| {
            if amount >= 0 {
                format!("Manual credit by admin {}", admin_id)
            } else {
                format!("Manual debit by admin {}", admin_id)
            }
        });

        let wallet_repo = WalletRepository::new(self.db);
        wallet_repo
            .apply(ApplyTransactionParam {
                account_id: target_id,
                kind: TransactionKind::Adjustment,
                amount,
                source: None,
                initiator: admin_id.to_string(),
                comment,
            })
            .await
    }

    /// Looks up the Minecraft name withdrawals pay out to.
    async fn require_minecraft_name(&self, account_id: u64) -> Result<String, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_discord_id(account_id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        user.minecraft_name
            .ok_or_else(|| WalletError::MinecraftNameNotLinked.into())
    }
}
