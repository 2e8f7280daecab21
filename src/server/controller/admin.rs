use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::wallet::{AdjustBalanceDto, ForceWithdrawDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::wallet::WalletService,
        state::AppState,
    },
};

/// POST /api/admin/wallet/credit - Credit another account's wallet
///
/// # Authentication
/// Requires the caller to be on the admin allow-list
///
/// # Returns
/// - `200 OK`: WalletTransactionDto for the recorded credit
/// - `400 Bad Request`: Non-positive amount
/// - `403 Forbidden`: Caller is not on the allow-list
/// - `404 Not Found`: Target account does not exist
pub async fn admin_credit(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<AdjustBalanceDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session, &state.admin_discord_ids);
    let admin = auth_guard.require(&[Permission::Admin]).await?;

    let wallet_service = WalletService::new(&state.db);
    let transaction = wallet_service
        .admin_credit(admin.discord_id, body.discord_id, body.amount, body.comment)
        .await?;

    Ok((StatusCode::OK, Json(transaction.into_dto())))
}

/// POST /api/admin/wallet/debit - Debit another account's wallet
///
/// `amount` is the positive number of units to remove.
///
/// # Authentication
/// Requires the caller to be on the admin allow-list
///
/// # Returns
/// - `200 OK`: WalletTransactionDto for the recorded debit
/// - `400 Bad Request`: Non-positive amount or insufficient funds
/// - `403 Forbidden`: Caller is not on the allow-list
/// - `404 Not Found`: Target account does not exist
pub async fn admin_debit(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<AdjustBalanceDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session, &state.admin_discord_ids);
    let admin = auth_guard.require(&[Permission::Admin]).await?;

    let wallet_service = WalletService::new(&state.db);
    let transaction = wallet_service
        .admin_debit(admin.discord_id, body.discord_id, body.amount, body.comment)
        .await?;

    Ok((StatusCode::OK, Json(transaction.into_dto())))
}

/// POST /api/admin/wallet/withdraw - Force a withdrawal from another account
///
/// Debits the target's balance and queues the in-game payout exactly like a
/// self-service withdrawal, but recorded with the admin as the initiator and
/// without the minimum-withdrawal floor.
///
/// # Authentication
/// Requires the caller to be on the admin allow-list
///
/// # Returns
/// - `200 OK`: WalletTransactionDto for the recorded debit
/// - `400 Bad Request`: Non-positive amount, insufficient funds, or target
///   has no linked Minecraft name
/// - `403 Forbidden`: Caller is not on the allow-list
/// - `404 Not Found`: Target account does not exist
pub async fn admin_withdraw(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<ForceWithdrawDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session, &state.admin_discord_ids);
    let admin = auth_guard.require(&[Permission::Admin]).await?;

    let wallet_service = WalletService::new(&state.db);
    let transaction = wallet_service
        .admin_withdraw(admin.discord_id, body.discord_id, body.amount)
        .await?;

    Ok((StatusCode::OK, Json(transaction.into_dto())))
}
