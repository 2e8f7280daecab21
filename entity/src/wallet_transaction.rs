//! Append-only audit record for every balance change.
//!
//! `source` and `source_ref` identify the external row a salary payout was
//! generated from (for example `("ban", "5")` or `("check", <RFC 3339 date>)`)
//! and carry a unique index so the same row can never be paid twice. Manual
//! adjustments and withdrawals leave both columns NULL. The `comment` column
//! is display-only prose and takes no part in deduplication.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "wallet_transaction")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub account_id: String,
    pub kind: String,
    pub amount: i64,
    pub source: Option<String>,
    pub source_ref: Option<String>,
    pub initiator: String,
    pub comment: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AccountId",
        to = "super::user::Column::DiscordId"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
