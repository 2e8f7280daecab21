//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for the application's own data
//! - Database connection pool for the external punishment ledger (read-only)
//! - HTTP client for external API requests
//! - OAuth2 client for Discord authentication
//! - The admin allow-list and application URL from configuration

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Type alias for the OAuth2 client configured for Discord authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
///
/// This struct holds all the shared state that needs to be accessible across
/// request handlers. It is initialized once during server startup and then
/// cloned (cheaply, as it contains reference-counted or cloneable types) for
/// each incoming request via Axum's state extraction.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `reqwest::Client` uses an `Arc` internally
/// - `OAuth2Client` is designed to be cloned
/// - `Arc<Vec<u64>>` is a reference-counted pointer
/// - `String` is cloned when needed
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    ///
    /// This connection is shared across all requests and manages a pool of
    /// connections to the application database.
    pub db: DatabaseConnection,

    /// Database connection pool for the moderation plugin's punishment ledger.
    ///
    /// The ledger is owned by the moderation plugin on the game server; this
    /// application only ever reads from it.
    pub ledger_db: DatabaseConnection,

    /// HTTP client for making external API requests.
    ///
    /// Configured with security settings (no redirects) to prevent SSRF
    /// vulnerabilities. Used for Discord API calls during login.
    pub http_client: reqwest::Client,

    /// OAuth2 client for Discord authentication flow.
    ///
    /// Handles the OAuth2 authentication flow including generating login URLs
    /// and exchanging authorization codes for access tokens.
    pub oauth_client: OAuth2Client,

    /// Discord IDs allowed to call the admin wallet endpoints.
    ///
    /// A fixed allow-list loaded from configuration at startup.
    pub admin_discord_ids: Arc<Vec<u64>>,

    /// Application base URL for generating links.
    ///
    /// Used to redirect back to the frontend after login and logout.
    pub app_url: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// This constructor is called once during server startup after all
    /// dependencies have been initialized. The resulting state is then
    /// provided to the Axum router for use in request handlers.
    ///
    /// # Arguments
    /// - `db` - Application database connection pool
    /// - `ledger_db` - Punishment ledger database connection pool
    /// - `http_client` - HTTP client for external API requests
    /// - `oauth_client` - OAuth2 client for Discord authentication
    /// - `admin_discord_ids` - Allow-list for admin endpoints
    /// - `app_url` - Application base URL
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        ledger_db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        admin_discord_ids: Vec<u64>,
        app_url: String,
    ) -> Self {
        Self {
            db,
            ledger_db,
            http_client,
            oauth_client,
            admin_discord_ids: Arc::new(admin_discord_ids),
            app_url,
        }
    }
}
