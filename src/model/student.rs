use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Student profile as returned by the API.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct StudentDto {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub student_code: String,
    pub enrollment_year: i32,
    pub user_id: i32,
}

/// Payload for the admin-only student creation endpoint.
///
/// Creates the backing account (role `student`) and the profile in one step.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateStudentDto {
    pub username: String,
    pub email: String,
    pub password: String,
    pub name: String,
    pub age: i32,
    pub student_code: String,
    pub enrollment_year: i32,
}

/// Payload for patching a student profile. The account link is not patchable.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateStudentDto {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub student_code: Option<String>,
    pub enrollment_year: Option<i32>,
}
