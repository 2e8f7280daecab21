//! Key/value repository for background-job state.
//!
//! The salary job persists its per-source cursors through this repository.
//! Values are opaque strings; the caller owns their encoding.

use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, EntityTrait};

use crate::server::error::AppError;

pub struct JobStateRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> JobStateRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Reads the value stored under a key.
    ///
    /// # Returns
    /// - `Ok(Some(value))` - Key exists
    /// - `Ok(None)` - Key has never been written
    /// - `Err(AppError)` - Database error during query
    pub async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let entity = entity::prelude::JobState::find_by_id(key.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(|state| state.value))
    }

    /// Writes a value under a key, overwriting any previous value.
    ///
    /// # Returns
    /// - `Ok(())` - Value persisted
    /// - `Err(AppError)` - Database error during upsert
    pub async fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        entity::prelude::JobState::insert(entity::job_state::ActiveModel {
            key: ActiveValue::Set(key.to_string()),
            value: ActiveValue::Set(value.to_string()),
        })
        .on_conflict(
            OnConflict::column(entity::job_state::Column::Key)
                .update_columns([entity::job_state::Column::Value])
                .to_owned(),
        )
        .exec(self.db)
        .await?;

        Ok(())
    }
}
