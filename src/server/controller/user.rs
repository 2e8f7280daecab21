use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::user::SetMinecraftNameDto,
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::{GetStaffParam, SetMinecraftNameParam},
        service::user::UserService,
        state::AppState,
    },
};

const DEFAULT_PER_PAGE: u64 = 25;

/// Query parameters for paginated listings.
#[derive(Deserialize)]
pub struct PaginationParams {
    /// Zero-indexed page number, defaults to 0.
    pub page: Option<u64>,
    /// Page size, defaults to 25.
    pub per_page: Option<u64>,
}

/// GET /api/staff - Get the staff directory
///
/// Returns a paginated list of every staff account, ordered alphabetically
/// by name, with each account's admin status resolved against the allow-list.
///
/// # Authentication
/// Requires user to be logged in (no admin permission required)
///
/// # Returns
/// - `200 OK`: PaginatedStaffDto for the requested page
/// - `401 Unauthorized`: No authenticated session
/// - `500 Internal Server Error`: Database or parsing error
pub async fn get_staff(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session, &state.admin_discord_ids);
    auth_guard.require(&[]).await?;

    let user_service = UserService::new(&state.db);
    let staff = user_service
        .get_staff(GetStaffParam {
            page: params.page.unwrap_or(0),
            per_page: params.per_page.unwrap_or(DEFAULT_PER_PAGE),
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(staff.into_dto(&state.admin_discord_ids)),
    ))
}

/// PUT /api/user/minecraft-name - Link the caller's Minecraft name
///
/// Binds an in-game display name to the caller's account. The binding is the
/// key salary payouts are resolved against, so a name already claimed by a
/// different account is rejected.
///
/// # Authentication
/// Requires user to be logged in (no admin permission required)
///
/// # Returns
/// - `200 OK`: Binding created or updated
/// - `400 Bad Request`: Empty name, or name claimed by another account
/// - `401 Unauthorized`: No authenticated session
pub async fn set_minecraft_name(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<SetMinecraftNameDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session, &state.admin_discord_ids);
    let user = auth_guard.require(&[]).await?;

    let user_service = UserService::new(&state.db);
    user_service
        .set_minecraft_name(SetMinecraftNameParam {
            discord_id: user.discord_id,
            name: body.name,
        })
        .await?;

    Ok(StatusCode::OK)
}
