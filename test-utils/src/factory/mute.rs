//! Mute factory for seeding the test punishment ledger.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test mute rows with customizable fields.
///
/// Same shape and defaults as the ban factory, for the mute table.
pub struct MuteFactory<'a> {
    db: &'a DatabaseConnection,
    id: Option<i64>,
    name: String,
    muted_by_name: Option<String>,
    reason: Option<String>,
    time: i64,
    until: i64,
    active: bool,
}

impl<'a> MuteFactory<'a> {
    /// Creates a new MuteFactory with default values.
    ///
    /// Defaults:
    /// - id: database auto-increment
    /// - name: `"Spammer {id}"`
    /// - muted_by_name: `"Moderator {id}"`
    /// - reason: `"Test mute"`
    /// - time: now (unix milliseconds)
    /// - until: `-1` (permanent)
    /// - active: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id: None,
            name: format!("Spammer {}", id),
            muted_by_name: Some(format!("Moderator {}", id)),
            reason: Some("Test mute".to_string()),
            time: Utc::now().timestamp_millis(),
            until: -1,
            active: true,
        }
    }

    /// Pins the row id instead of relying on auto-increment.
    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Overrides the punished player's name.
    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Overrides the issuing moderator's name.
    pub fn muted_by(mut self, name: &str) -> Self {
        self.muted_by_name = Some(name.to_string());
        self
    }

    /// Clears the issuing moderator.
    pub fn muted_by_none(mut self) -> Self {
        self.muted_by_name = None;
        self
    }

    /// Overrides the mute's start time (unix milliseconds).
    pub fn time_millis(mut self, millis: i64) -> Self {
        self.time = millis;
        self
    }

    /// Inserts the mute and returns the persisted entity model.
    pub async fn build(self) -> Result<entity::mute::Model, DbErr> {
        entity::mute::ActiveModel {
            id: match self.id {
                Some(id) => ActiveValue::Set(id),
                None => ActiveValue::NotSet,
            },
            name: ActiveValue::Set(self.name),
            muted_by_name: ActiveValue::Set(self.muted_by_name),
            reason: ActiveValue::Set(self.reason),
            time: ActiveValue::Set(self.time),
            until: ActiveValue::Set(self.until),
            active: ActiveValue::Set(self.active),
        }
        .insert(self.db)
        .await
    }
}
