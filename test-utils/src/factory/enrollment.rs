//! Enrollment factory for creating test enrollment entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::enrollment::EnrollmentStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test enrollments with customizable fields.
///
/// The student profile and course must already exist; pass their ids.
///
/// # Example
///
/// ```rust,ignore
/// use entity::enrollment::EnrollmentStatus;
/// use test_utils::factory::enrollment::EnrollmentFactory;
///
/// let enrollment = EnrollmentFactory::new(&db, student.id, course.id)
///     .semester("2026-Fall")
///     .status(EnrollmentStatus::Completed)
///     .grade(Some("A".to_string()))
///     .build()
///     .await?;
/// ```
pub struct EnrollmentFactory<'a> {
    db: &'a DatabaseConnection,
    student_id: i32,
    course_id: i32,
    grade: Option<String>,
    semester: String,
    status: EnrollmentStatus,
}

impl<'a> EnrollmentFactory<'a> {
    /// Creates a new EnrollmentFactory with default values.
    ///
    /// Defaults:
    /// - semester: `"2026-S{id}"` where id is auto-incremented (unique per test row)
    /// - status: `EnrollmentStatus::Enrolled`
    /// - grade: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `student_id` - Id of the enrolled student profile
    /// - `course_id` - Id of the course
    pub fn new(db: &'a DatabaseConnection, student_id: i32, course_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            student_id,
            course_id,
            grade: None,
            semester: format!("2026-S{}", id),
            status: EnrollmentStatus::Enrolled,
        }
    }

    /// Sets the semester label for the enrollment.
    pub fn semester(mut self, semester: impl Into<String>) -> Self {
        self.semester = semester.into();
        self
    }

    /// Sets the status for the enrollment.
    pub fn status(mut self, status: EnrollmentStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the grade for the enrollment.
    pub fn grade(mut self, grade: Option<String>) -> Self {
        self.grade = grade;
        self
    }

    /// Builds and inserts the enrollment entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::enrollment::Model)` - Created enrollment entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::enrollment::Model, DbErr> {
        entity::enrollment::ActiveModel {
            student_id: ActiveValue::Set(self.student_id),
            course_id: ActiveValue::Set(self.course_id),
            grade: ActiveValue::Set(self.grade),
            semester: ActiveValue::Set(self.semester),
            enrollment_date: ActiveValue::Set(Utc::now()),
            status: ActiveValue::Set(self.status),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an enrollment with default values for an existing student and course.
///
/// Shorthand for `EnrollmentFactory::new(db, student_id, course_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `student_id` - Id of the enrolled student profile
/// - `course_id` - Id of the course
///
/// # Returns
/// - `Ok(entity::enrollment::Model)` - Created enrollment entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_enrollment(
    db: &DatabaseConnection,
    student_id: i32,
    course_id: i32,
) -> Result<entity::enrollment::Model, DbErr> {
    EnrollmentFactory::new(db, student_id, course_id).build().await
}
