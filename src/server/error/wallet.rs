use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum WalletError {
    /// Debit would take the balance below zero.
    ///
    /// The balance check happens inside the same database transaction as the
    /// write, so a concurrent credit cannot make this check stale.
    #[error("Insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds { balance: i64, requested: i64 },

    /// Withdrawal amount is below the minimum threshold.
    #[error("Withdrawal of {requested} is below the minimum of {minimum}")]
    BelowMinimumWithdrawal { minimum: i64, requested: i64 },

    /// The amount of a credit, debit, or withdrawal must be positive.
    #[error("Amount must be positive, got {0}")]
    NonPositiveAmount(i64),

    /// Withdrawal requires a linked Minecraft name to pay out to.
    #[error("Account has no linked Minecraft name")]
    MinecraftNameNotLinked,
}

/// Converts wallet errors into HTTP responses.
///
/// All wallet errors are client errors: the request was well-formed but the
/// operation is not allowed in the wallet's current state.
///
/// # Returns
/// - 400 Bad Request - For every variant
impl IntoResponse for WalletError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::InsufficientFunds { .. } => "Insufficient funds".to_string(),
            Self::BelowMinimumWithdrawal { minimum, .. } => {
                format!("The minimum withdrawal is {}", minimum)
            }
            Self::NonPositiveAmount(_) => "Amount must be positive".to_string(),
            Self::MinecraftNameNotLinked => {
                "Link your Minecraft name before withdrawing".to_string()
            }
        };

        (StatusCode::BAD_REQUEST, Json(ErrorDto { error: message })).into_response()
    }
}
