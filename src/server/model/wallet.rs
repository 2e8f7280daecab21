//! Wallet domain models and parameters.
//!
//! Domain types for balances and the append-only transaction audit trail,
//! plus the parameter types every balance change funnels through.

use chrono::{DateTime, Utc};

use crate::{
    model::wallet::{WalletDto, WalletHistoryDto, WalletTransactionDto},
    server::{
        error::{internal::InternalError, AppError},
        model::salary::SalarySource,
        util::parse::parse_u64_from_string,
    },
};

/// A wallet's balance for one account.
#[derive(Debug, Clone, PartialEq)]
pub struct Wallet {
    pub account_id: u64,
    pub balance: i64,
}

impl Wallet {
    pub fn into_dto(self) -> WalletDto {
        WalletDto {
            account_id: self.account_id,
            balance: self.balance,
        }
    }
}

/// Why a balance changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    /// Automatic payout by the salary reconciliation job.
    Salary,
    /// Manual credit or debit by an admin.
    Adjustment,
    /// Withdrawal to the in-game currency.
    Withdrawal,
}

impl TransactionKind {
    /// The tag stored in the `kind` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Salary => "salary",
            Self::Adjustment => "adjustment",
            Self::Withdrawal => "withdrawal",
        }
    }

    /// Parses a stored kind tag back into the enum.
    ///
    /// # Returns
    /// - `Ok(TransactionKind)` - Recognized tag
    /// - `Err(AppError::InternalErr(UnknownTransactionKind))` - The database
    ///   holds a tag this version does not know
    pub fn from_str(value: &str) -> Result<Self, AppError> {
        match value {
            "salary" => Ok(Self::Salary),
            "adjustment" => Ok(Self::Adjustment),
            "withdrawal" => Ok(Self::Withdrawal),
            other => Err(InternalError::UnknownTransactionKind(other.to_string()).into()),
        }
    }
}

/// The external ledger row a salary transaction was generated from.
///
/// The pair is unique across all transactions ever written, which is what
/// makes re-processing a ledger row idempotent. The display comment plays no
/// part in this.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionSource {
    pub source: SalarySource,
    /// The row's identity within its source: the numeric id for bans and
    /// mutes, the RFC 3339 date for checks.
    pub reference: String,
}

/// An immutable audit record for one balance change.
#[derive(Debug, Clone, PartialEq)]
pub struct WalletTransaction {
    pub id: i32,
    pub account_id: u64,
    pub kind: TransactionKind,
    pub amount: i64,
    pub initiator: String,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl WalletTransaction {
    pub fn into_dto(self) -> WalletTransactionDto {
        WalletTransactionDto {
            id: self.id,
            kind: self.kind.as_str().to_string(),
            amount: self.amount,
            initiator: self.initiator,
            comment: self.comment,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model at the repository boundary.
    pub fn from_entity(entity: entity::wallet_transaction::Model) -> Result<Self, AppError> {
        let account_id = parse_u64_from_string(entity.account_id)?;

        Ok(Self {
            id: entity.id,
            account_id,
            kind: TransactionKind::from_str(&entity.kind)?,
            amount: entity.amount,
            initiator: entity.initiator,
            comment: entity.comment,
            created_at: entity.created_at,
        })
    }
}

/// Paginated slice of a wallet's transaction history.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedTransactions {
    pub transactions: Vec<WalletTransaction>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedTransactions {
    pub fn into_dto(self) -> WalletHistoryDto {
        WalletHistoryDto {
            transactions: self.transactions.into_iter().map(|t| t.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Parameters for one atomic balance change.
///
/// Every path that moves currency - the salary job, admin adjustments,
/// withdrawals - builds one of these and hands it to the wallet repository,
/// which applies the balance write and the audit insert in one database
/// transaction.
#[derive(Debug, Clone)]
pub struct ApplyTransactionParam {
    /// Account whose wallet changes.
    pub account_id: u64,
    pub kind: TransactionKind,
    /// Signed amount; negative for debits.
    pub amount: i64,
    /// The originating ledger row for salary payouts, `None` otherwise.
    pub source: Option<TransactionSource>,
    /// Who initiated the change: `"salary"` for the job, otherwise the
    /// acting user's Discord ID.
    pub initiator: String,
    /// Display-only prose shown in the wallet history.
    pub comment: String,
}

/// Parameters for a withdrawal (self-service or admin-forced).
#[derive(Debug, Clone)]
pub struct WithdrawParam {
    /// Account whose balance is debited.
    pub account_id: u64,
    /// Positive amount to withdraw.
    pub amount: i64,
    /// In-game name the payout command targets.
    pub minecraft_name: String,
    /// Who initiated the withdrawal (the account owner or an admin).
    pub initiator: String,
}

/// Parameters for paginated history queries.
#[derive(Debug, Clone)]
pub struct GetHistoryParam {
    pub account_id: u64,
    /// Zero-indexed page number.
    pub page: u64,
    pub per_page: u64,
}
