//! Mute record in the moderation plugin's punishment ledger.
//!
//! Same shape and ownership as [`super::ban`]: external, append-only,
//! times in unix milliseconds, read-only from this application.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "mute")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name of the punished player.
    pub name: String,
    /// Display name of the moderator who issued the mute, if any.
    pub muted_by_name: Option<String>,
    pub reason: Option<String>,
    /// Start of the mute, unix milliseconds.
    pub time: i64,
    /// End of the mute, unix milliseconds; -1 for permanent.
    pub until: i64,
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
