use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A ban from the punishment ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BanDto {
    pub id: i64,
    pub player: String,
    pub moderator: Option<String>,
    pub reason: Option<String>,
    pub time: DateTime<Utc>,
    /// `None` for a permanent ban.
    pub until: Option<DateTime<Utc>>,
    pub active: bool,
}

/// A mute from the punishment ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MuteDto {
    pub id: i64,
    pub player: String,
    pub moderator: Option<String>,
    pub reason: Option<String>,
    pub time: DateTime<Utc>,
    /// `None` for a permanent mute.
    pub until: Option<DateTime<Utc>>,
    pub active: bool,
}

/// One anti-cheat check from the moderation log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckDto {
    pub date: DateTime<Utc>,
    pub moderator: String,
    pub player: String,
    pub check_type: String,
}

/// Everything the punishment viewer shows for one player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerPunishmentsDto {
    pub bans: Vec<BanDto>,
    pub mutes: Vec<MuteDto>,
    pub checks: Vec<CheckDto>,
}
