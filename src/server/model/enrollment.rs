//! Enrollment domain model, parameters, and the status state machine.
//!
//! The state machine is a pure function over (current status, current grade,
//! requested change) so the rules can be tested without a database. The
//! repository applies the resulting state inside the same transaction that
//! re-checks capacity and uniqueness.

use chrono::{DateTime, Utc};
use entity::enrollment::EnrollmentStatus;
use sea_orm::ActiveEnum;

use crate::{model::enrollment::EnrollmentDto, server::error::AppError};

/// Enrollment linking a student to a course for a semester.
#[derive(Debug, Clone, PartialEq)]
pub struct Enrollment {
    pub id: i32,
    pub student_id: i32,
    pub course_id: i32,
    /// Present only when status is `Completed`.
    pub grade: Option<String>,
    pub semester: String,
    pub enrollment_date: DateTime<Utc>,
    pub status: EnrollmentStatus,
}

impl Enrollment {
    /// Converts the enrollment domain model to a DTO for API responses.
    pub fn into_dto(self) -> EnrollmentDto {
        EnrollmentDto {
            id: self.id,
            student_id: self.student_id,
            course_id: self.course_id,
            grade: self.grade,
            semester: self.semester,
            enrollment_date: self.enrollment_date,
            status: self.status.to_value(),
        }
    }

    /// Converts an entity model to an enrollment domain model at the repository boundary.
    pub fn from_entity(entity: entity::enrollment::Model) -> Self {
        Self {
            id: entity.id,
            student_id: entity.student_id,
            course_id: entity.course_id,
            grade: entity.grade,
            semester: entity.semester,
            enrollment_date: entity.enrollment_date,
            status: entity.status,
        }
    }
}

/// Parses a status string from a request payload.
///
/// # Arguments
/// - `value` - Status name as sent by the client
///
/// # Returns
/// - `Ok(EnrollmentStatus)` - Recognized status
/// - `Err(AppError::BadRequest)` - Unknown status name
pub fn parse_status(value: &str) -> Result<EnrollmentStatus, AppError> {
    match value {
        "enrolled" => Ok(EnrollmentStatus::Enrolled),
        "completed" => Ok(EnrollmentStatus::Completed),
        "dropped" => Ok(EnrollmentStatus::Dropped),
        other => Err(AppError::BadRequest(format!(
            "Unknown enrollment status '{}'",
            other
        ))),
    }
}

/// Parameters for creating an enrollment.
///
/// New enrollments always start as `Enrolled` with no grade, so neither is a
/// parameter.
#[derive(Debug, Clone)]
pub struct CreateEnrollmentParams {
    pub student_id: i32,
    pub course_id: i32,
    pub semester: String,
}

/// Parameters for patching an enrollment: a status transition and/or a grade.
#[derive(Debug, Clone)]
pub struct UpdateEnrollmentParams {
    pub id: i32,
    pub status: Option<EnrollmentStatus>,
    pub grade: Option<String>,
}

/// Applies a requested status/grade change to an enrollment's current state.
///
/// Transition rules:
/// - `Enrolled` is the only state transitions may start from; `Completed`
///   and `Dropped` are terminal.
/// - Completing requires a grade in the same request.
/// - Dropping clears any grade, including one sent alongside the request.
/// - A grade on its own is only accepted for an already-completed
///   enrollment (grade amendment); grading an `Enrolled` or `Dropped` row
///   is rejected.
///
/// # Arguments
/// - `current_status` - Status stored for the enrollment
/// - `current_grade` - Grade stored for the enrollment
/// - `new_status` - Requested status, if any
/// - `new_grade` - Requested grade, if any
///
/// # Returns
/// - `Ok((status, grade))` - The state to persist
/// - `Err(AppError::BadRequest)` - The change violates the rules above
pub fn apply_status_change(
    current_status: EnrollmentStatus,
    current_grade: Option<String>,
    new_status: Option<EnrollmentStatus>,
    new_grade: Option<String>,
) -> Result<(EnrollmentStatus, Option<String>), AppError> {
    let Some(target) = new_status else {
        // Grade-only change.
        return match (current_status, new_grade) {
            (_, None) => Ok((current_status, current_grade)),
            (EnrollmentStatus::Completed, Some(grade)) => Ok((EnrollmentStatus::Completed, Some(grade))),
            (_, Some(_)) => Err(AppError::BadRequest(
                "A grade can only be set on a completed enrollment".to_string(),
            )),
        };
    };

    if target == current_status {
        // No-op transition; a grade may still ride along under the same rules.
        return apply_status_change(current_status, current_grade, None, new_grade);
    }

    if current_status != EnrollmentStatus::Enrolled {
        return Err(AppError::BadRequest(format!(
            "Enrollment is already {} and can no longer change status",
            current_status.to_value()
        )));
    }

    match target {
        EnrollmentStatus::Completed => match new_grade {
            Some(grade) => Ok((EnrollmentStatus::Completed, Some(grade))),
            None => Err(AppError::BadRequest(
                "A grade is required to complete an enrollment".to_string(),
            )),
        },
        EnrollmentStatus::Dropped => Ok((EnrollmentStatus::Dropped, None)),
        // target == Enrolled is unreachable here: equal statuses returned above
        // and both other current states were rejected as terminal.
        EnrollmentStatus::Enrolled => Err(AppError::BadRequest(
            "An enrollment cannot return to enrolled status".to_string(),
        )),
    }
}
