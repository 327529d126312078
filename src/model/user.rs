use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Account as returned by the API. The password hash is never serialized.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// Payload for the admin-only account creation endpoint.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateUserDto {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

/// Payload for patching an account.
///
/// Only the fields present here can ever be changed through a patch; a role
/// change is additionally restricted to admin callers.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateUserDto {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}
