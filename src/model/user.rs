use serde::{Deserialize, Serialize};

/// A staff member as exposed over the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    pub discord_id: u64,
    pub name: String,
    pub minecraft_name: Option<String>,
    pub admin: bool,
}

/// One page of the staff directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedStaffDto {
    pub users: Vec<UserDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// Request body for linking the caller's Minecraft name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetMinecraftNameDto {
    pub name: String,
}
