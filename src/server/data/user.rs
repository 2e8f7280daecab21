//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing staff accounts in the database.
//! It handles account creation at login, directory queries, and the Minecraft display-name
//! binding used by salary identity resolution, with proper conversion between entity
//! models and domain models at the infrastructure boundary.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    error::AppError,
    model::user::{UpsertUserParam, User},
};

/// Repository providing database operations for staff accounts.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and querying user records.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts a user from parameter model.
    ///
    /// Inserts a new account or refreshes an existing account's display name.
    /// The Minecraft name binding is deliberately left out of the conflict
    /// update so a login never clears it.
    ///
    /// # Arguments
    /// - `param` - User upsert parameters including discord_id and name
    ///
    /// # Returns
    /// - `Ok(User)` - The created or updated user
    /// - `Err(AppError)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertUserParam) -> Result<User, AppError> {
        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            discord_id: ActiveValue::Set(param.discord_id.to_string()),
            name: ActiveValue::Set(param.name),
            minecraft_name: ActiveValue::NotSet,
            created_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::DiscordId)
                .update_columns([entity::user::Column::Name])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        User::from_entity(entity)
    }

    /// Finds a user by their Discord ID.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID as u64
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found with full data
    /// - `Ok(None)` - No user found with that Discord ID
    /// - `Err(AppError)` - Database error during query
    pub async fn find_by_discord_id(&self, user_id: u64) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find_by_id(user_id.to_string())
            .one(self.db)
            .await?;

        entity.map(User::from_entity).transpose()
    }

    /// Finds the account a Minecraft display name is linked to.
    ///
    /// This is the identity-resolution lookup the salary job runs for every
    /// ledger author. The comparison is case-insensitive on both sides.
    ///
    /// # Arguments
    /// - `name` - The in-game display name to resolve
    ///
    /// # Returns
    /// - `Ok(Some(User))` - An account has linked this name
    /// - `Ok(None)` - No account has linked this name
    /// - `Err(AppError)` - Database error during query
    pub async fn find_by_minecraft_name(&self, name: &str) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(entity::user::Column::MinecraftName)))
                    .eq(name.to_lowercase()),
            )
            .one(self.db)
            .await?;

        entity.map(User::from_entity).transpose()
    }

    /// Sets the Minecraft display name linked to an account.
    ///
    /// Overwrites any previous binding for this account. Whether the name is
    /// already claimed by another account is checked at the service layer.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the account as u64
    /// - `name` - The in-game display name to bind
    ///
    /// # Returns
    /// - `Ok(())` - Binding updated (or no matching account found)
    /// - `Err(AppError)` - Database error during update operation
    pub async fn set_minecraft_name(&self, user_id: u64, name: &str) -> Result<(), AppError> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::DiscordId.eq(user_id.to_string()))
            .col_expr(
                entity::user::Column::MinecraftName,
                sea_orm::sea_query::Expr::value(name.to_string()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Gets all staff accounts with pagination.
    ///
    /// Returns a paginated list of all accounts, ordered alphabetically by name.
    /// Used by the staff directory.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of users to return per page
    ///
    /// # Returns
    /// - `Ok((users, total))` - Users for the requested page and total account count
    /// - `Err(AppError)` - Database error during pagination query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<User>, u64), AppError> {
        let paginator = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Name)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let users = entities
            .into_iter()
            .map(User::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((users, total))
    }
}
