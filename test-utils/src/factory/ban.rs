//! Ban factory for seeding the test punishment ledger.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test ban rows with customizable fields.
///
/// Defaults produce an active, permanent ban issued "now" by a named
/// moderator. Tests exercising cursor arithmetic usually pin `id` and
/// `time_millis` explicitly.
pub struct BanFactory<'a> {
    db: &'a DatabaseConnection,
    id: Option<i64>,
    name: String,
    banned_by_name: Option<String>,
    reason: Option<String>,
    time: i64,
    until: i64,
    active: bool,
}

impl<'a> BanFactory<'a> {
    /// Creates a new BanFactory with default values.
    ///
    /// Defaults:
    /// - id: database auto-increment
    /// - name: `"Griefer {id}"`
    /// - banned_by_name: `"Moderator {id}"`
    /// - reason: `"Test ban"`
    /// - time: now (unix milliseconds)
    /// - until: `-1` (permanent)
    /// - active: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id: None,
            name: format!("Griefer {}", id),
            banned_by_name: Some(format!("Moderator {}", id)),
            reason: Some("Test ban".to_string()),
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
    pub fn banned_by(mut self, name: &str) -> Self {
        self.banned_by_name = Some(name.to_string());
        self
    }

    /// Clears the issuing moderator (ledger rows may lack an author).
    pub fn banned_by_none(mut self) -> Self {
        self.banned_by_name = None;
        self
    }

    /// Overrides the ban's start time (unix milliseconds).
    pub fn time_millis(mut self, millis: i64) -> Self {
        self.time = millis;
        self
    }

    /// Overrides the ban's end time (unix milliseconds, -1 for permanent).
    pub fn until_millis(mut self, millis: i64) -> Self {
        self.until = millis;
        self
    }

    /// Marks the ban as lifted.
    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    /// Inserts the ban and returns the persisted entity model.
    pub async fn build(self) -> Result<entity::ban::Model, DbErr> {
        entity::ban::ActiveModel {
            id: match self.id {
                Some(id) => ActiveValue::Set(id),
                None => ActiveValue::NotSet,
            },
            name: ActiveValue::Set(self.name),
            banned_by_name: ActiveValue::Set(self.banned_by_name),
            reason: ActiveValue::Set(self.reason),
            time: ActiveValue::Set(self.time),
            until: ActiveValue::Set(self.until),
            active: ActiveValue::Set(self.active),
        }
        .insert(self.db)
        .await
    }
}
