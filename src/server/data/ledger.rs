//! Read-only repository over the moderation plugin's punishment ledger.
//!
//! The ledger database belongs to the moderation plugin on the game server.
//! This repository only ever reads from it: incremental fetches for the salary
//! job and per-player lookups for the punishment viewer. Times in the ledger
//! are unix milliseconds.

use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    error::AppError,
    model::{
        punishment::{Ban, Mute},
        salary::LedgerEntry,
    },
};

pub struct LedgerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LedgerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches bans past the cursor, oldest first.
    ///
    /// Only rows with `id > cursor_id` and `time >= cutoff_millis` are
    /// returned, capped at `limit`. The cutoff filter holds even when the
    /// cursor is reset, so pre-cutoff history can never be fetched.
    ///
    /// # Returns
    /// - `Ok(Vec<LedgerEntry>)` - Matching rows in ascending id order
    /// - `Err(AppError)` - Database error during query
    pub async fn fetch_bans_after(
        &self,
        cursor_id: i64,
        cutoff_millis: i64,
        limit: u64,
    ) -> Result<Vec<LedgerEntry>, AppError> {
        let entities = entity::prelude::Ban::find()
            .filter(entity::ban::Column::Id.gt(cursor_id))
            .filter(entity::ban::Column::Time.gte(cutoff_millis))
            .order_by_asc(entity::ban::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(LedgerEntry::from_ban).collect())
    }

    /// Fetches mutes past the cursor, oldest first.
    ///
    /// Same contract as [`Self::fetch_bans_after`].
    pub async fn fetch_mutes_after(
        &self,
        cursor_id: i64,
        cutoff_millis: i64,
        limit: u64,
    ) -> Result<Vec<LedgerEntry>, AppError> {
        let entities = entity::prelude::Mute::find()
            .filter(entity::mute::Column::Id.gt(cursor_id))
            .filter(entity::mute::Column::Time.gte(cutoff_millis))
            .order_by_asc(entity::mute::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(LedgerEntry::from_mute).collect())
    }

    /// Finds the id of the first ban at or after the cutoff instant.
    ///
    /// Used once per source to seed the cursor to "one before" the first
    /// payable row.
    ///
    /// # Returns
    /// - `Ok(Some(id))` - The first payable ban's id
    /// - `Ok(None)` - No ban at or after the cutoff exists yet
    /// - `Err(AppError)` - Database error during query
    pub async fn first_ban_id_at_or_after(
        &self,
        cutoff_millis: i64,
    ) -> Result<Option<i64>, AppError> {
        let entity = entity::prelude::Ban::find()
            .filter(entity::ban::Column::Time.gte(cutoff_millis))
            .order_by_asc(entity::ban::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(|ban| ban.id))
    }

    /// Finds the id of the first mute at or after the cutoff instant.
    ///
    /// Same contract as [`Self::first_ban_id_at_or_after`].
    pub async fn first_mute_id_at_or_after(
        &self,
        cutoff_millis: i64,
    ) -> Result<Option<i64>, AppError> {
        let entity = entity::prelude::Mute::find()
            .filter(entity::mute::Column::Time.gte(cutoff_millis))
            .order_by_asc(entity::mute::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(|mute| mute.id))
    }

    /// Gets every ban ever issued against a player, newest first.
    ///
    /// The player name comparison is case-insensitive.
    pub async fn get_bans_for_player(&self, player: &str) -> Result<Vec<Ban>, AppError> {
        let entities = entity::prelude::Ban::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(entity::ban::Column::Name)))
                    .eq(player.to_lowercase()),
            )
            .order_by_desc(entity::ban::Column::Time)
            .all(self.db)
            .await?;

        entities.into_iter().map(Ban::from_entity).collect()
    }

    /// Gets every mute ever issued against a player, newest first.
    ///
    /// The player name comparison is case-insensitive.
    pub async fn get_mutes_for_player(&self, player: &str) -> Result<Vec<Mute>, AppError> {
        let entities = entity::prelude::Mute::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(entity::mute::Column::Name)))
                    .eq(player.to_lowercase()),
            )
            .order_by_desc(entity::mute::Column::Time)
            .all(self.db)
            .await?;

        entities.into_iter().map(Mute::from_entity).collect()
    }
}
