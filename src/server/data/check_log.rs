//! Repository over the anti-cheat check log.
//!
//! The table lives in the application database but its rows are written by
//! the anti-cheat plugin; this repository only reads. The `date` column is
//! both the ordering key and a row's identity.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{error::AppError, model::punishment::Check};

pub struct CheckLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CheckLogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches checks past the cursor, oldest first.
    ///
    /// Only rows with `date > cursor` and `date >= cutoff` are returned,
    /// capped at `limit`.
    ///
    /// # Returns
    /// - `Ok(Vec<Check>)` - Matching rows in ascending date order
    /// - `Err(AppError)` - Database error during query
    pub async fn fetch_checks_after(
        &self,
        cursor: DateTime<Utc>,
        cutoff: DateTime<Utc>,
        limit: u64,
    ) -> Result<Vec<Check>, AppError> {
        let entities = entity::prelude::CheckLog::find()
            .filter(entity::check_log::Column::Date.gt(cursor))
            .filter(entity::check_log::Column::Date.gte(cutoff))
            .order_by_asc(entity::check_log::Column::Date)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Check::from_entity).collect())
    }

    /// Gets every check ever run against a player, newest first.
    ///
    /// The player name comparison is case-insensitive.
    pub async fn get_checks_for_player(&self, player: &str) -> Result<Vec<Check>, AppError> {
        let entities = entity::prelude::CheckLog::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(entity::check_log::Column::TargetName)))
                    .eq(player.to_lowercase()),
            )
            .order_by_desc(entity::check_log::Column::Date)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Check::from_entity).collect())
    }
}
