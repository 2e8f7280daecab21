//! User service for business logic.
//!
//! This module provides the `UserService` for staff-account business logic:
//! directory queries and the Minecraft display-name binding that feeds salary
//! identity resolution.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{GetStaffParam, PaginatedStaff, SetMinecraftNameParam, User},
};

/// Service providing business logic for staff accounts.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a user by their Discord ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found with full domain data
    /// - `Ok(None)` - No user found with that Discord ID
    /// - `Err(AppError)` - Database error during query
    pub async fn get_user(&self, discord_id: u64) -> Result<Option<User>, AppError> {
        let user_repo = UserRepository::new(self.db);
        let user = user_repo.find_by_discord_id(discord_id).await?;
        Ok(user)
    }

    /// Retrieves the staff directory with pagination.
    ///
    /// Returns a paginated collection of accounts ordered alphabetically by
    /// name, with page metadata computed from the total count.
    ///
    /// # Returns
    /// - `Ok(PaginatedStaff)` - Users for the requested page with pagination metadata
    /// - `Err(AppError)` - Database error during pagination query
    pub async fn get_staff(&self, param: GetStaffParam) -> Result<PaginatedStaff, AppError> {
        let user_repo = UserRepository::new(self.db);

        let (users, total) = user_repo
            .get_all_paginated(param.page, param.per_page)
            .await?;

        let total_pages = total.div_ceil(param.per_page.max(1));

        Ok(PaginatedStaff {
            users,
            total,
            page: param.page,
            per_page: param.per_page,
            total_pages,
        })
    }

    /// Links a Minecraft display name to an account.
    ///
    /// The binding is what the salary job resolves ledger authors against, so
    /// a name already claimed by a different account is rejected; the
    /// comparison is case-insensitive. Relinking the caller's own name (in any
    /// casing) is allowed.
    ///
    /// # Returns
    /// - `Ok(())` - Binding created or updated
    /// - `Err(AppError::BadRequest)` - Name is empty or claimed by another account
    /// - `Err(AppError)` - Database error
    pub async fn set_minecraft_name(&self, param: SetMinecraftNameParam) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        let name = param.name.trim();
        if name.is_empty() {
            return Err(AppError::BadRequest(
                "Minecraft name must not be empty".to_string(),
            ));
        }

        if let Some(owner) = user_repo.find_by_minecraft_name(name).await? {
            if owner.discord_id != param.discord_id {
                return Err(AppError::BadRequest(
                    "This Minecraft name is already linked to another account".to_string(),
                ));
            }
        }

        user_repo.set_minecraft_name(param.discord_id, name).await?;

        Ok(())
    }
}
