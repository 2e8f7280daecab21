//! Punishment-viewer domain models.
//!
//! Read-only views over the moderation plugin's ledger (bans, mutes) and the
//! anti-cheat check log. The ledger stores times as unix milliseconds; the
//! conversion to `DateTime<Utc>` happens here at the repository boundary.

use chrono::{DateTime, Utc};

use crate::{
    model::punishment::{BanDto, CheckDto, MuteDto, PlayerPunishmentsDto},
    server::error::{internal::InternalError, AppError},
};

/// A ban as shown in the punishment viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct Ban {
    pub id: i64,
    pub player: String,
    pub moderator: Option<String>,
    pub reason: Option<String>,
    pub time: DateTime<Utc>,
    pub until: Option<DateTime<Utc>>,
    pub active: bool,
}

impl Ban {
    pub fn into_dto(self) -> BanDto {
        BanDto {
            id: self.id,
            player: self.player,
            moderator: self.moderator,
            reason: self.reason,
            time: self.time,
            until: self.until,
            active: self.active,
        }
    }

    pub fn from_entity(entity: entity::ban::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            player: entity.name,
            moderator: entity.banned_by_name,
            reason: entity.reason,
            time: datetime_from_millis(entity.time)?,
            until: until_from_millis(entity.until)?,
            active: entity.active,
        })
    }
}

/// A mute as shown in the punishment viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct Mute {
    pub id: i64,
    pub player: String,
    pub moderator: Option<String>,
    pub reason: Option<String>,
    pub time: DateTime<Utc>,
    pub until: Option<DateTime<Utc>>,
    pub active: bool,
}

impl Mute {
    pub fn into_dto(self) -> MuteDto {
        MuteDto {
            id: self.id,
            player: self.player,
            moderator: self.moderator,
            reason: self.reason,
            time: self.time,
            until: self.until,
            active: self.active,
        }
    }

    pub fn from_entity(entity: entity::mute::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            player: entity.name,
            moderator: entity.muted_by_name,
            reason: entity.reason,
            time: datetime_from_millis(entity.time)?,
            until: until_from_millis(entity.until)?,
            active: entity.active,
        })
    }
}

/// One anti-cheat check from the moderation log.
#[derive(Debug, Clone, PartialEq)]
pub struct Check {
    pub date: DateTime<Utc>,
    pub moderator: String,
    pub player: String,
    pub check_type: String,
}

impl Check {
    pub fn into_dto(self) -> CheckDto {
        CheckDto {
            date: self.date,
            moderator: self.moderator,
            player: self.player,
            check_type: self.check_type,
        }
    }

    pub fn from_entity(entity: entity::check_log::Model) -> Self {
        Self {
            date: entity.date,
            moderator: entity.checker_name,
            player: entity.target_name,
            check_type: entity.check_type,
        }
    }
}

/// Everything the punishment viewer shows for one player.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerPunishments {
    pub bans: Vec<Ban>,
    pub mutes: Vec<Mute>,
    pub checks: Vec<Check>,
}

impl PlayerPunishments {
    pub fn into_dto(self) -> PlayerPunishmentsDto {
        PlayerPunishmentsDto {
            bans: self.bans.into_iter().map(|b| b.into_dto()).collect(),
            mutes: self.mutes.into_iter().map(|m| m.into_dto()).collect(),
            checks: self.checks.into_iter().map(|c| c.into_dto()).collect(),
        }
    }
}

fn datetime_from_millis(millis: i64) -> Result<DateTime<Utc>, AppError> {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .ok_or_else(|| InternalError::InvalidTimestamp(millis).into())
}

/// The ledger stores `-1` for punishments with no end.
fn until_from_millis(millis: i64) -> Result<Option<DateTime<Utc>>, AppError> {
    if millis < 0 {
        return Ok(None);
    }

    Ok(Some(datetime_from_millis(millis)?))
}
