//! Account domain model and parameters.
//!
//! Provides the domain model for authenticatable accounts along with parameter
//! types for account creation and partial updates. Role parsing lives here so
//! the string↔enum conversion is done once, at the model boundary.

use chrono::{DateTime, Utc};
use entity::user::Role;
use sea_orm::ActiveEnum;

use crate::{model::user::UserDto, server::error::AppError};

/// Authenticatable account with credentials and a role.
///
/// The password hash never leaves the server; `into_dto` drops it.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: i32,
    /// Unique login/display name.
    pub username: String,
    /// Unique email address, used for login.
    pub email: String,
    /// Argon2id password hash.
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Converts the account domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `UserDto` - The converted DTO, without the password hash
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            role: self.role.to_value(),
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to an account domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Account` - The converted account domain model
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            password_hash: entity.password_hash,
            role: entity.role,
            created_at: entity.created_at,
        }
    }
}

/// Parses a role string from a request payload.
///
/// # Arguments
/// - `value` - Role name as sent by the client
///
/// # Returns
/// - `Ok(Role)` - Recognized role
/// - `Err(AppError::BadRequest)` - Unknown role name
pub fn parse_role(value: &str) -> Result<Role, AppError> {
    match value {
        "student" => Ok(Role::Student),
        "instructor" => Ok(Role::Instructor),
        "admin" => Ok(Role::Admin),
        other => Err(AppError::BadRequest(format!("Unknown role '{}'", other))),
    }
}

/// Parameters for creating an account.
#[derive(Debug, Clone)]
pub struct CreateAccountParams {
    pub username: String,
    pub email: String,
    /// Already-hashed password; hashing happens in the service layer.
    pub password_hash: String,
    pub role: Role,
}

/// Parameters for patching an account.
///
/// `None` fields are left untouched. A `Some` role is only honored for admin
/// callers; the controller enforces that before building these params.
#[derive(Debug, Clone)]
pub struct UpdateAccountParams {
    pub id: i32,
    pub username: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub role: Option<Role>,
}
