use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::server::{
    error::AppError, middleware::auth::AuthGuard, service::punishment::PunishmentService,
    state::AppState,
};

/// GET /api/punishments/{player} - Get a player's punishment record
///
/// Returns every ban and mute issued against the player from the punishment
/// ledger and every anti-cheat check run against them, newest first. An
/// unknown player yields empty lists, not a 404.
///
/// # Authentication
/// Requires user to be logged in (no admin permission required)
///
/// # Returns
/// - `200 OK`: PlayerPunishmentsDto for the player
/// - `401 Unauthorized`: No authenticated session
/// - `500 Internal Server Error`: Database error
pub async fn get_player_punishments(
    State(state): State<AppState>,
    Path(player): Path<String>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session, &state.admin_discord_ids);
    auth_guard.require(&[]).await?;

    let punishment_service = PunishmentService::new(&state.db, &state.ledger_db);
    let punishments = punishment_service.get_player_punishments(&player).await?;

    Ok((StatusCode::OK, Json(punishments.into_dto())))
}
