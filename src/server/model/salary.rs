//! Salary reconciliation domain models.

/// One of the three log sources the salary job reconciles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SalarySource {
    Ban,
    Mute,
    Check,
}

impl SalarySource {
    /// The tag stored in the `source` column of salary transactions.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ban => "ban",
            Self::Mute => "mute",
            Self::Check => "check",
        }
    }

    /// Amount credited for one entry from this source.
    pub fn rate(&self) -> i64 {
        match self {
            Self::Ban => 600,
            Self::Mute => 200,
            Self::Check => 350,
        }
    }

    /// Key of this source's cursor in the job-state table.
    pub fn cursor_key(&self) -> &'static str {
        match self {
            Self::Ban => "salary:last_ban_id",
            Self::Mute => "salary:last_mute_id",
            Self::Check => "salary:last_check_at",
        }
    }
}

/// A ban or mute row reduced to what the salary job needs.
///
/// Bans and mutes share this shape; only the source tag and the rate differ.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerEntry {
    pub id: i64,
    /// Display name of the moderator, if the ledger recorded one.
    pub author: Option<String>,
    /// Display name of the punished player, for the audit comment.
    pub target: String,
    /// Start of the punishment, unix milliseconds.
    pub time_millis: i64,
}

impl LedgerEntry {
    pub fn from_ban(entity: entity::ban::Model) -> Self {
        Self {
            id: entity.id,
            author: entity.banned_by_name,
            target: entity.name,
            time_millis: entity.time,
        }
    }

    pub fn from_mute(entity: entity::mute::Model) -> Self {
        Self {
            id: entity.id,
            author: entity.muted_by_name,
            target: entity.name,
            time_millis: entity.time,
        }
    }
}

/// What one reconciliation pass did, for logging and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassSummary {
    /// Entries that produced a payout.
    pub credited: u32,
    /// Entries visited but skipped (system actor, duplicate, unmapped author).
    pub skipped: u32,
}

impl PassSummary {
    pub fn merge(&mut self, other: PassSummary) {
        self.credited += other.credited;
        self.skipped += other.skipped;
    }
}
