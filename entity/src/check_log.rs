//! Moderator anti-cheat check log.
//!
//! Rows are written by the anti-cheat plugin on the game server; this
//! application only reads them. The `date` column is both the ordering key
//! and the row's identity, so it doubles as the primary key.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "check_log")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub date: DateTimeUtc,
    pub checker_name: String,
    pub target_name: String,
    pub check_type: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
