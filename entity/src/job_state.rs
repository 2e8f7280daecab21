//! Generic key/value store for background-job state.
//!
//! The salary job keeps its per-source cursors here ("last_ban_id",
//! "last_mute_id", "last_check_at"). Values are stored as strings and parsed
//! by the reader; a cursor row is written on the first pass for its source
//! and overwritten every pass after that, never deleted.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "job_state")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub key: String,
    pub value: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
