use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A wallet's current balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletDto {
    pub account_id: u64,
    pub balance: i64,
}

/// One audit record in a wallet's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletTransactionDto {
    pub id: i32,
    pub kind: String,
    pub amount: i64,
    pub initiator: String,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

/// One page of a wallet's transaction history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletHistoryDto {
    pub transactions: Vec<WalletTransactionDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// Request body for a withdrawal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawDto {
    pub amount: i64,
}

/// Request body for an admin credit or debit of another account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjustBalanceDto {
    pub discord_id: u64,
    pub amount: i64,
    pub comment: Option<String>,
}

/// Request body for an admin-forced withdrawal from another account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForceWithdrawDto {
    pub discord_id: u64,
    pub amount: i64,
}
