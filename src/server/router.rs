use axum::{
    routing::{get, post, put},
    Router,
};

use crate::server::{
    controller::{
        admin::{admin_credit, admin_debit, admin_withdraw},
        auth::{callback, get_user, login, logout},
        punishment::get_player_punishments,
        user::{get_staff, set_minecraft_name},
        wallet::{get_wallet, get_wallet_history, withdraw},
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", get(login))
        .route("/api/auth/callback", get(callback))
        .route("/api/auth/logout", get(logout))
        .route("/api/auth/user", get(get_user))
        .route("/api/staff", get(get_staff))
        .route("/api/user/minecraft-name", put(set_minecraft_name))
        .route("/api/punishments/{player}", get(get_player_punishments))
        .route("/api/wallet", get(get_wallet))
        .route("/api/wallet/history", get(get_wallet_history))
        .route("/api/wallet/withdraw", post(withdraw))
        .route("/api/admin/wallet/credit", post(admin_credit))
        .route("/api/admin/wallet/debit", post(admin_debit))
        .route("/api/admin/wallet/withdraw", post(admin_withdraw))
}
