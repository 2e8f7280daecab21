use chrono::{DateTime, Utc};

use crate::server::error::{config::ConfigError, AppError};

const DISCORD_AUTH_URL: &str = "https://discord.com/oauth2/authorize";
const DISCORD_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_SALARY_INTERVAL_SECS: u64 = 10;
/// Ledger rows timed before this instant are never paid out, no matter what
/// the cursors say.
const DEFAULT_SALARY_CUTOFF: &str = "2026-01-01T00:00:00Z";

pub struct Config {
    pub database_url: String,
    pub ledger_database_url: String,
    pub bind_address: String,
    pub app_url: String,

    pub discord_client_id: String,
    pub discord_client_secret: String,
    pub discord_redirect_url: String,

    pub discord_auth_url: String,
    pub discord_token_url: String,

    /// Discord IDs allowed to call the admin wallet endpoints.
    pub admin_discord_ids: Vec<u64>,

    pub salary: SalaryConfig,
}

/// Settings for the salary reconciliation job.
#[derive(Clone, Copy, Debug)]
pub struct SalaryConfig {
    pub interval_secs: u64,
    pub cutoff: DateTime<Utc>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: require_env("DATABASE_URL")?,
            ledger_database_url: require_env("LEDGER_DATABASE_URL")?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            app_url: require_env("APP_URL")?,
            discord_client_id: require_env("DISCORD_CLIENT_ID")?,
            discord_client_secret: require_env("DISCORD_CLIENT_SECRET")?,
            discord_redirect_url: require_env("DISCORD_REDIRECT_URL")?,
            discord_auth_url: DISCORD_AUTH_URL.to_string(),
            discord_token_url: DISCORD_TOKEN_URL.to_string(),
            admin_discord_ids: parse_admin_ids()?,
            salary: SalaryConfig::from_env()?,
        })
    }
}

impl SalaryConfig {
    fn from_env() -> Result<Self, AppError> {
        let interval_secs = match std::env::var("SALARY_INTERVAL_SECS") {
            Ok(value) => value.parse::<u64>().map_err(|_| {
                ConfigError::InvalidEnvVar("SALARY_INTERVAL_SECS".to_string(), value)
            })?,
            Err(_) => DEFAULT_SALARY_INTERVAL_SECS,
        };

        let cutoff_value = std::env::var("SALARY_CUTOFF_DATE")
            .unwrap_or_else(|_| DEFAULT_SALARY_CUTOFF.to_string());
        let cutoff = DateTime::parse_from_rfc3339(&cutoff_value)
            .map_err(|_| {
                ConfigError::InvalidEnvVar("SALARY_CUTOFF_DATE".to_string(), cutoff_value)
            })?
            .with_timezone(&Utc);

        Ok(Self {
            interval_secs,
            cutoff,
        })
    }
}

fn require_env(name: &str) -> Result<String, AppError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()).into())
}

fn parse_admin_ids() -> Result<Vec<u64>, AppError> {
    let Ok(raw) = std::env::var("ADMIN_DISCORD_IDS") else {
        return Ok(Vec::new());
    };

    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| {
            id.parse::<u64>().map_err(|_| {
                ConfigError::InvalidEnvVar("ADMIN_DISCORD_IDS".to_string(), id.to_string()).into()
            })
        })
        .collect()
}
