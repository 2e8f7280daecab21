//! Ban record in the moderation plugin's punishment ledger.
//!
//! Lives in the external ledger database and is owned by the moderation
//! plugin, which stores times as unix milliseconds. Read-only from this
//! application's perspective.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "ban")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name of the punished player.
    pub name: String,
    /// Display name of the moderator who issued the ban, if any.
    pub banned_by_name: Option<String>,
    pub reason: Option<String>,
    /// Start of the ban, unix milliseconds.
    pub time: i64,
    /// End of the ban, unix milliseconds; -1 for permanent.
    pub until: i64,
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
