//! User domain models and parameters.
//!
//! Provides domain models for staff accounts with Discord identity and the
//! Minecraft display-name binding used by salary identity resolution. Includes
//! parameter types for account creation during login and directory queries.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{PaginatedStaffDto, UserDto},
    server::{error::AppError, util::parse::parse_u64_from_string},
};

/// Staff account with Discord identity and Minecraft name binding.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Discord ID of the user
    pub discord_id: u64,
    /// Display name of the user.
    pub name: String,
    /// The user's in-game display name, if linked.
    ///
    /// This is the case-insensitive key the salary job resolves ledger
    /// authors against.
    pub minecraft_name: Option<String>,
    /// When the account first logged in.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    ///
    /// Whether the user is an admin is not stored on the account; it is
    /// resolved against the configured allow-list by the caller.
    ///
    /// # Arguments
    /// - `admin` - Whether the user's Discord ID is on the admin allow-list
    ///
    /// # Returns
    /// - `UserDto` - The converted user DTO
    pub fn into_dto(self, admin: bool) -> UserDto {
        UserDto {
            discord_id: self.discord_id,
            name: self.name,
            minecraft_name: self.minecraft_name,
            admin,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalErr(ParseStringId))` - Failed to convert stored user
    ///   Discord ID from String to u64
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let discord_id = parse_u64_from_string(entity.discord_id)?;

        Ok(Self {
            discord_id,
            name: entity.name,
            minecraft_name: entity.minecraft_name,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for upserting a user during login.
///
/// Creates new accounts or refreshes an existing account's display name. The
/// Minecraft name binding is never touched here; it has its own operation.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    /// Discord ID of the user
    pub discord_id: u64,
    /// Display name of the user.
    pub name: String,
}

/// Paginated slice of the staff directory.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedStaff {
    /// Users for this page.
    pub users: Vec<User>,
    /// Total number of users across all pages.
    pub total: u64,
    /// Current page number (zero-indexed).
    pub page: u64,
    /// Number of users per page.
    pub per_page: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl PaginatedStaff {
    /// Converts the paginated staff domain model to a DTO for API responses.
    ///
    /// # Arguments
    /// - `admin_ids` - The configured admin allow-list, used to mark admins
    ///
    /// # Returns
    /// - `PaginatedStaffDto` - The converted DTO
    pub fn into_dto(self, admin_ids: &[u64]) -> PaginatedStaffDto {
        let users = self
            .users
            .into_iter()
            .map(|u| {
                let admin = admin_ids.contains(&u.discord_id);
                u.into_dto(admin)
            })
            .collect();

        PaginatedStaffDto {
            users,
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Parameters for paginated staff directory queries.
#[derive(Debug, Clone)]
pub struct GetStaffParam {
    /// Zero-indexed page number.
    pub page: u64,
    /// Number of users to return per page.
    pub per_page: u64,
}

/// Parameters for linking a Minecraft name to an account.
#[derive(Debug, Clone)]
pub struct SetMinecraftNameParam {
    /// Discord ID of the account being linked.
    pub discord_id: u64,
    /// The in-game display name to bind.
    pub name: String,
}
