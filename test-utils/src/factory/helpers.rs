//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a student profile together with its backing account.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, student))` - The created account and student profile
/// - `Err(DbErr)` - Database error during creation
pub async fn create_student_with_account(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::student::Model), DbErr> {
    let user =
        crate::factory::user::create_user_with_role(db, entity::user::Role::Student).await?;
    let student = crate::factory::student::create_student(db, user.id).await?;

    Ok((user, student))
}

/// Creates a course together with its owning instructor and that instructor's account.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, instructor, course))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_course_with_instructor(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::instructor::Model,
        entity::course::Model,
    ),
    DbErr,
> {
    let user =
        crate::factory::user::create_user_with_role(db, entity::user::Role::Instructor).await?;
    let instructor = crate::factory::instructor::create_instructor(db, user.id).await?;
    let course = crate::factory::course::create_course(db, instructor.id).await?;

    Ok((user, instructor, course))
}

/// Creates a complete enrollment hierarchy with all dependencies.
///
/// This is a convenience method that creates:
/// 1. Student account and profile
/// 2. Instructor account and profile
/// 3. Course owned by the instructor
/// 4. Enrollment linking the student to the course
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((student, course, enrollment))` - Tuple of the created student profile,
///   course and enrollment
/// - `Err(DbErr)` - Database error during creation
pub async fn create_enrollment_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::student::Model,
        entity::course::Model,
        entity::enrollment::Model,
    ),
    DbErr,
> {
    let (_, student) = create_student_with_account(db).await?;
    let (_, _, course) = create_course_with_instructor(db).await?;
    let enrollment = crate::factory::enrollment::create_enrollment(db, student.id, course.id).await?;

    Ok((student, course, enrollment))
}
