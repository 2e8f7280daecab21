use oauth2::{
    basic::BasicTokenType, AuthorizationCode, EmptyExtraTokenFields, StandardTokenResponse,
    TokenResponse,
};
use serde::Deserialize;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{UpsertUserParam, User},
    service::auth::DiscordAuthService,
    util::parse::parse_u64_from_string,
};

/// The subset of Discord's `/users/@me` response this application needs.
#[derive(Debug, Deserialize)]
struct DiscordUser {
    id: String,
    username: String,
    global_name: Option<String>,
}

impl<'a> DiscordAuthService<'a> {
    /// Completes the OAuth flow for an authorization code.
    ///
    /// Exchanges the code for an access token, fetches the Discord identity
    /// behind it, and upserts the staff account. The returned user is what the
    /// controller stores in the session.
    pub async fn callback(&self, authorization_code: String) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let auth_code = AuthorizationCode::new(authorization_code);

        let token = self
            .oauth_client
            .exchange_code(auth_code)
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchangeFailed(e.to_string()))?;

        let discord_user = self.fetch_discord_user(&token).await?;

        let discord_id = parse_u64_from_string(discord_user.id)?;
        let name = discord_user
            .global_name
            .unwrap_or(discord_user.username);

        let user = user_repo
            .upsert(UpsertUserParam { discord_id, name })
            .await?;

        Ok(user)
    }

    /// Retrieves a Discord user's information using provided access token
    async fn fetch_discord_user(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<DiscordUser, AppError> {
        let access_token = token.access_token().secret();

        let user_info = self
            .http_client
            .get("https://discord.com/api/users/@me")
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?
            .json::<DiscordUser>()
            .await?;

        Ok(user_info)
    }
}
