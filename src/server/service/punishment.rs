//! Punishment viewer service.
//!
//! Collects everything the dashboard shows for one player: bans and mutes
//! from the external punishment ledger, checks from the moderation log.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{check_log::CheckLogRepository, ledger::LedgerRepository},
    error::AppError,
    model::punishment::PlayerPunishments,
};

pub struct PunishmentService<'a> {
    pub db: &'a DatabaseConnection,
    pub ledger_db: &'a DatabaseConnection,
}

impl<'a> PunishmentService<'a> {
    pub fn new(db: &'a DatabaseConnection, ledger_db: &'a DatabaseConnection) -> Self {
        Self { db, ledger_db }
    }

    /// Retrieves a player's full punishment record.
    ///
    /// # Returns
    /// - `Ok(PlayerPunishments)` - Bans, mutes, and checks for the player
    ///   (all empty if the player is unknown)
    /// - `Err(AppError)` - Database error during any of the queries
    pub async fn get_player_punishments(
        &self,
        player: &str,
    ) -> Result<PlayerPunishments, AppError> {
        let ledger_repo = LedgerRepository::new(self.ledger_db);
        let check_repo = CheckLogRepository::new(self.db);

        let bans = ledger_repo.get_bans_for_player(player).await?;
        let mutes = ledger_repo.get_mutes_for_player(player).await?;
        let checks = check_repo.get_checks_for_player(player).await?;

        Ok(PlayerPunishments {
            bans,
            mutes,
            checks,
        })
    }
}
