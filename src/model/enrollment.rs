use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Enrollment as returned by the API.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct EnrollmentDto {
    pub id: i32,
    pub student_id: i32,
    pub course_id: i32,
    pub grade: Option<String>,
    pub semester: String,
    pub enrollment_date: DateTime<Utc>,
    pub status: String,
}

/// Payload for enrollment creation.
///
/// New enrollments always start in `enrolled` status with no grade, so
/// neither field is accepted here. `student_id` is required for admin and
/// instructor callers; student callers may omit it (they can only enroll
/// themselves).
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateEnrollmentDto {
    pub student_id: Option<i32>,
    pub course_id: i32,
    pub semester: String,
}

/// Payload for patching an enrollment: status transitions and grades only.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateEnrollmentDto {
    pub status: Option<String>,
    pub grade: Option<String>,
}
