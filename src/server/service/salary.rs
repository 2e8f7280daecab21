//! Salary reconciliation service.
//!
//! Converts new entries in the moderation logs into wallet credits for the
//! staff member who produced each entry, exactly once per entry. Three
//! sources are tracked: bans and mutes from the external punishment ledger,
//! and anti-cheat checks from the moderation log. Each source keeps its own
//! cursor in the job-state table; a pass fetches the rows past the cursor,
//! credits what it can, and advances the cursor to the highest key it saw.
//!
//! Skips are deliberate and silent by design: rows authored by system actors,
//! rows already paid out (structural dedup on the transaction's source
//! columns), and rows whose author has no linked account. The cursor advances
//! past skipped rows either way - an author who links their account later is
//! not paid retroactively.
//!
//! A failure while processing one source aborts that source's sub-pass
//! without persisting its cursor; the other sources still run. Rows credited
//! before the failure are safe to revisit on the next tick because the dedup
//! check suppresses them.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        check_log::CheckLogRepository, job_state::JobStateRepository, ledger::LedgerRepository,
        user::UserRepository, wallet::WalletRepository,
    },
    error::{internal::InternalError, AppError},
    model::{
        punishment::Check,
        salary::{LedgerEntry, PassSummary, SalarySource},
        wallet::{ApplyTransactionParam, TransactionKind, TransactionSource},
    },
};

/// Rows fetched from one source per pass. The only throttle the job has:
/// payout latency is traded for bounded per-pass work.
const BATCH_SIZE: u64 = 50;

/// Log authors that are not people and never earn a payout.
const SYSTEM_ACTORS: [&str; 3] = ["Console", "Anticheat", "RCON"];

/// Initiator tag recorded on every automatic payout.
const SALARY_INITIATOR: &str = "salary";

pub struct SalaryService<'a> {
    db: &'a DatabaseConnection,
    ledger_db: &'a DatabaseConnection,
    cutoff: DateTime<Utc>,
}

impl<'a> SalaryService<'a> {
    /// Creates a new SalaryService instance.
    ///
    /// # Arguments
    /// - `db` - Application database (wallets, cursors, check log)
    /// - `ledger_db` - External punishment ledger (bans, mutes), read-only
    /// - `cutoff` - Rows timed before this instant are never paid out
    pub fn new(
        db: &'a DatabaseConnection,
        ledger_db: &'a DatabaseConnection,
        cutoff: DateTime<Utc>,
    ) -> Self {
        Self {
            db,
            ledger_db,
            cutoff,
        }
    }

    /// Runs one reconciliation pass over all three sources.
    ///
    /// Sources are processed independently: an error in one is logged and
    /// aborts only that source's sub-pass, leaving its cursor untouched so
    /// the next tick retries from the same position.
    pub async fn run_pass(&self) -> PassSummary {
        let mut summary = PassSummary::default();

        match self.process_bans().await {
            Ok(s) => summary.merge(s),
            Err(e) => tracing::error!("Error processing ban salaries: {}", e),
        }

        match self.process_mutes().await {
            Ok(s) => summary.merge(s),
            Err(e) => tracing::error!("Error processing mute salaries: {}", e),
        }

        match self.process_checks().await {
            Ok(s) => summary.merge(s),
            Err(e) => tracing::error!("Error processing check salaries: {}", e),
        }

        summary
    }

    /// Reconciles new bans from the punishment ledger.
    async fn process_bans(&self) -> Result<PassSummary, AppError> {
        let ledger_repo = LedgerRepository::new(self.ledger_db);
        let state_repo = JobStateRepository::new(self.db);
        let cutoff_millis = self.cutoff.timestamp_millis();
        let key = SalarySource::Ban.cursor_key();

        let cursor = match self.load_id_cursor(key).await? {
            Some(cursor) => cursor,
            None => {
                // First run for this source: seed the cursor to one before
                // the first payable row, flooring it at the cutoff.
                // Processing starts on the next pass. With no payable rows
                // nothing is persisted and seeding is retried next pass.
                if let Some(first_id) =
                    ledger_repo.first_ban_id_at_or_after(cutoff_millis).await?
                {
                    state_repo.set(key, &(first_id - 1).to_string()).await?;
                }
                return Ok(PassSummary::default());
            }
        };

        let entries = ledger_repo
            .fetch_bans_after(cursor, cutoff_millis, BATCH_SIZE)
            .await?;

        self.process_ledger_entries(SalarySource::Ban, cursor, entries)
            .await
    }

    /// Reconciles new mutes from the punishment ledger.
    async fn process_mutes(&self) -> Result<PassSummary, AppError> {
        let ledger_repo = LedgerRepository::new(self.ledger_db);
        let state_repo = JobStateRepository::new(self.db);
        let cutoff_millis = self.cutoff.timestamp_millis();
        let key = SalarySource::Mute.cursor_key();

        let cursor = match self.load_id_cursor(key).await? {
            Some(cursor) => cursor,
            None => {
                if let Some(first_id) =
                    ledger_repo.first_mute_id_at_or_after(cutoff_millis).await?
                {
                    state_repo.set(key, &(first_id - 1).to_string()).await?;
                }
                return Ok(PassSummary::default());
            }
        };

        let entries = ledger_repo
            .fetch_mutes_after(cursor, cutoff_millis, BATCH_SIZE)
            .await?;

        self.process_ledger_entries(SalarySource::Mute, cursor, entries)
            .await
    }

    /// Reconciles new anti-cheat checks from the moderation log.
    async fn process_checks(&self) -> Result<PassSummary, AppError> {
        let state_repo = JobStateRepository::new(self.db);
        let check_repo = CheckLogRepository::new(self.db);
        let key = SalarySource::Check.cursor_key();

        let cursor = match state_repo.get(key).await? {
            Some(value) => DateTime::parse_from_rfc3339(&value)
                .map_err(|_| InternalError::InvalidCursor {
                    key: key.to_string(),
                    value,
                })?
                .with_timezone(&Utc),
            None => {
                // First run for this source: floor the cursor at the cutoff
                // so pre-cutoff history is never visited. Processing starts
                // on the next pass.
                state_repo.set(key, &self.cutoff.to_rfc3339()).await?;
                return Ok(PassSummary::default());
            }
        };

        let checks = check_repo
            .fetch_checks_after(cursor, self.cutoff, BATCH_SIZE)
            .await?;

        if checks.is_empty() {
            return Ok(PassSummary::default());
        }

        let mut summary = PassSummary::default();
        let mut max_date = cursor;

        for check in checks {
            max_date = max_date.max(check.date);

            let reference = check.date.to_rfc3339();
            summary.merge(
                self.pay_author(
                    SalarySource::Check,
                    &check.moderator,
                    TransactionSource {
                        source: SalarySource::Check,
                        reference,
                    },
                    check_comment(&check),
                )
                .await?,
            );
        }

        state_repo.set(key, &max_date.to_rfc3339()).await?;

        Ok(summary)
    }

    /// Loads an id-keyed cursor, `None` on the source's first run.
    async fn load_id_cursor(&self, key: &str) -> Result<Option<i64>, AppError> {
        let state_repo = JobStateRepository::new(self.db);

        match state_repo.get(key).await? {
            Some(value) => {
                let cursor =
                    value
                        .parse::<i64>()
                        .map_err(|_| InternalError::InvalidCursor {
                            key: key.to_string(),
                            value,
                        })?;
                Ok(Some(cursor))
            }
            None => Ok(None),
        }
    }

    /// Walks one batch of ban or mute entries and persists the new cursor.
    ///
    /// The running maximum id counts skipped rows too, so nothing in the
    /// batch is ever reconsidered. The cursor write happens after the loop;
    /// if a credit fails mid-batch the error propagates and the cursor stays
    /// where the last successful pass left it.
    async fn process_ledger_entries(
        &self,
        source: SalarySource,
        cursor: i64,
        entries: Vec<LedgerEntry>,
    ) -> Result<PassSummary, AppError> {
        if entries.is_empty() {
            return Ok(PassSummary::default());
        }

        let state_repo = JobStateRepository::new(self.db);

        let mut summary = PassSummary::default();
        let mut max_id = cursor;

        for entry in entries {
            max_id = max_id.max(entry.id);

            let author = entry.author.as_deref().unwrap_or("");
            summary.merge(
                self.pay_author(
                    source,
                    author,
                    TransactionSource {
                        source,
                        reference: entry.id.to_string(),
                    },
                    ledger_comment(source, &entry),
                )
                .await?,
            );
        }

        state_repo
            .set(source.cursor_key(), &max_id.to_string())
            .await?;

        Ok(summary)
    }

    /// Credits one log entry's author, or skips it.
    ///
    /// The skip conditions, in order: no author recorded, a system actor,
    /// already paid out, author has no linked account. Only the last one is
    /// logged - it is the one a staff member can act on.
    async fn pay_author(
        &self,
        source: SalarySource,
        author: &str,
        origin: TransactionSource,
        comment: String,
    ) -> Result<PassSummary, AppError> {
        let user_repo = UserRepository::new(self.db);
        let wallet_repo = WalletRepository::new(self.db);

        let mut summary = PassSummary::default();

        if author.is_empty() || is_system_actor(author) {
            summary.skipped += 1;
            return Ok(summary);
        }

        if wallet_repo.transaction_exists(&origin).await? {
            summary.skipped += 1;
            return Ok(summary);
        }

        let Some(user) = user_repo.find_by_minecraft_name(author).await? else {
            tracing::info!(
                "No linked account for author {:?}, skipping payout for {} {}",
                author,
                source.as_str(),
                origin.reference,
            );
            summary.skipped += 1;
            return Ok(summary);
        };

        wallet_repo
            .apply(ApplyTransactionParam {
                account_id: user.discord_id,
                kind: TransactionKind::Salary,
                amount: source.rate(),
                source: Some(origin),
                initiator: SALARY_INITIATOR.to_string(),
                comment,
            })
            .await?;

        summary.credited += 1;
        Ok(summary)
    }
}

fn is_system_actor(author: &str) -> bool {
    SYSTEM_ACTORS
        .iter()
        .any(|actor| actor.eq_ignore_ascii_case(author))
}

fn ledger_comment(source: SalarySource, entry: &LedgerEntry) -> String {
    format!(
        "Salary for {} #{} on {}",
        source.as_str(),
        entry.id,
        entry.target
    )
}

fn check_comment(check: &Check) -> String {
    format!(
        "Salary for {} check on {}",
        check.check_type, check.player
    )
}
