use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::wallet::WithdrawDto,
    server::{
        controller::user::PaginationParams,
        error::AppError,
        middleware::auth::AuthGuard,
        model::wallet::GetHistoryParam,
        service::wallet::WalletService,
        state::AppState,
    },
};

const DEFAULT_HISTORY_PER_PAGE: u64 = 25;

/// GET /api/wallet - Get the caller's wallet balance
///
/// # Authentication
/// Requires user to be logged in (no admin permission required)
///
/// # Returns
/// - `200 OK`: WalletDto with the current balance (0 if never credited)
/// - `401 Unauthorized`: No authenticated session
pub async fn get_wallet(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session, &state.admin_discord_ids);
    let user = auth_guard.require(&[]).await?;

    let wallet_service = WalletService::new(&state.db);
    let wallet = wallet_service.get_wallet(user.discord_id).await?;

    Ok((StatusCode::OK, Json(wallet.into_dto())))
}

/// GET /api/wallet/history - Get the caller's transaction history
///
/// Returns the caller's audit records, newest first.
///
/// # Authentication
/// Requires user to be logged in (no admin permission required)
///
/// # Returns
/// - `200 OK`: WalletHistoryDto for the requested page
/// - `401 Unauthorized`: No authenticated session
pub async fn get_wallet_history(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session, &state.admin_discord_ids);
    let user = auth_guard.require(&[]).await?;

    let wallet_service = WalletService::new(&state.db);
    let history = wallet_service
        .get_history(GetHistoryParam {
            account_id: user.discord_id,
            page: params.page.unwrap_or(0),
            per_page: params.per_page.unwrap_or(DEFAULT_HISTORY_PER_PAGE),
        })
        .await?;

    Ok((StatusCode::OK, Json(history.into_dto())))
}

/// POST /api/wallet/withdraw - Withdraw to the in-game currency
///
/// Debits the caller's balance and queues a payout command for the game
/// server, atomically. Withdrawals below the minimum (5000) are rejected with
/// no balance change and no audit record.
///
/// # Authentication
/// Requires user to be logged in (no admin permission required)
///
/// # Returns
/// - `200 OK`: WalletTransactionDto for the recorded debit
/// - `400 Bad Request`: Below minimum, insufficient funds, or no linked
///   Minecraft name
/// - `401 Unauthorized`: No authenticated session
pub async fn withdraw(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<WithdrawDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session, &state.admin_discord_ids);
    let user = auth_guard.require(&[]).await?;

    let wallet_service = WalletService::new(&state.db);
    let transaction = wallet_service.withdraw(user.discord_id, body.amount).await?;

    Ok((StatusCode::OK, Json(transaction.into_dto())))
}
