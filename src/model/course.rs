use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Course as returned by the API.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct CourseDto {
    pub id: i32,
    pub title: String,
    pub course_code: String,
    pub description: String,
    pub credit_hours: i32,
    pub max_capacity: i32,
    pub instructor_id: i32,
}

/// Payload for course creation.
///
/// `instructor_id` is required for admin callers; instructor callers may omit
/// it, in which case the course is created under their own profile.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateCourseDto {
    pub title: String,
    pub course_code: String,
    pub description: String,
    pub credit_hours: i32,
    pub max_capacity: i32,
    pub instructor_id: Option<i32>,
}

/// Payload for patching a course. Ownership is not patchable.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateCourseDto {
    pub title: Option<String>,
    pub course_code: Option<String>,
    pub description: Option<String>,
    pub credit_hours: Option<i32>,
    pub max_capacity: Option<i32>,
}
