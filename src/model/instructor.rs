use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Instructor profile as returned by the API.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct InstructorDto {
    pub id: i32,
    pub name: String,
    pub specialty: String,
    pub user_id: i32,
}

/// Payload for the admin-only instructor creation endpoint.
///
/// Creates the backing account (role `instructor`) and the profile in one step.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateInstructorDto {
    pub username: String,
    pub email: String,
    pub password: String,
    pub name: String,
    pub specialty: String,
}

/// Payload for patching an instructor profile. The account link is not patchable.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateInstructorDto {
    pub name: Option<String>,
    pub specialty: Option<String>,
}
