//! Check-log factory for seeding anti-cheat checks.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test check-log rows with customizable fields.
///
/// The `date` column is the row's identity, so tests that insert several
/// checks must give each a distinct date.
pub struct CheckLogFactory<'a> {
    db: &'a DatabaseConnection,
    date: DateTime<Utc>,
    checker_name: String,
    target_name: String,
    check_type: String,
}

impl<'a> CheckLogFactory<'a> {
    /// Creates a new CheckLogFactory with default values.
    ///
    /// Defaults:
    /// - date: now
    /// - checker_name: `"Moderator {id}"`
    /// - target_name: `"Player {id}"`
    /// - check_type: `"xray"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            date: Utc::now(),
            checker_name: format!("Moderator {}", id),
            target_name: format!("Player {}", id),
            check_type: "xray".to_string(),
        }
    }

    /// Overrides the check's date (its identity).
    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    /// Overrides the moderator who ran the check.
    pub fn checker(mut self, name: &str) -> Self {
        self.checker_name = name.to_string();
        self
    }

    /// Overrides the checked player.
    pub fn target(mut self, name: &str) -> Self {
        self.target_name = name.to_string();
        self
    }

    /// Overrides the check type.
    pub fn check_type(mut self, check_type: &str) -> Self {
        self.check_type = check_type.to_string();
        self
    }

    /// Inserts the check and returns the persisted entity model.
    pub async fn build(self) -> Result<entity::check_log::Model, DbErr> {
        entity::check_log::ActiveModel {
            date: ActiveValue::Set(self.date),
            checker_name: ActiveValue::Set(self.checker_name),
            target_name: ActiveValue::Set(self.target_name),
            check_type: ActiveValue::Set(self.check_type),
        }
        .insert(self.db)
        .await
    }
}
