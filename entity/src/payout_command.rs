//! Queue of payout commands for the game server.
//!
//! A successful withdrawal appends one row here in the same database
//! transaction that debits the wallet. The Minecraft server drains this
//! table and pays the named player in-game.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "payout_command")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub minecraft_name: String,
    pub amount: i64,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
