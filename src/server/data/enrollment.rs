//! Enrollment data repository for database operations.
//!
//! Enrollment creation is where the integrity rules bite: the duplicate-triple
//! check, the capacity count, and the insert all execute inside one
//! transaction. Two concurrent creations for the last seat serialize at the
//! database, so a course can never hold more `enrolled` rows than its
//! `max_capacity`. A plain check-then-insert outside the transaction would
//! race.

use entity::enrollment::EnrollmentStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::{
    error::AppError,
    model::enrollment::{CreateEnrollmentParams, Enrollment},
};

/// Repository providing database operations for enrollments.
pub struct EnrollmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EnrollmentRepository<'a> {
    /// Creates a new EnrollmentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an enrollment, enforcing the integrity rules atomically.
    ///
    /// Inside a single transaction:
    /// 1. The student and course must exist.
    /// 2. No enrollment may exist for the same (student, course, semester).
    /// 3. The course's `enrolled` count must be below `max_capacity`; the
    ///    count is recomputed here, never cached.
    ///
    /// The new enrollment starts as `Enrolled` with no grade.
    ///
    /// # Arguments
    /// - `params` - Student, course and semester for the new enrollment
    ///
    /// # Returns
    /// - `Ok(Enrollment)` - The created enrollment
    /// - `Err(AppError::NotFound)` - Student or course does not exist
    /// - `Err(AppError::Conflict)` - Duplicate enrollment or course at capacity
    /// - `Err(AppError::DbErr)` - Database error; nothing was inserted
    pub async fn create(&self, params: CreateEnrollmentParams) -> Result<Enrollment, AppError> {
        let txn = self.db.begin().await?;

        let student_exists = entity::prelude::Student::find_by_id(params.student_id)
            .count(&txn)
            .await?
            > 0;
        if !student_exists {
            return Err(AppError::NotFound("Student not found".to_string()));
        }

        let Some(course) = entity::prelude::Course::find_by_id(params.course_id).one(&txn).await?
        else {
            return Err(AppError::NotFound("Course not found".to_string()));
        };

        let duplicate = entity::prelude::Enrollment::find()
            .filter(entity::enrollment::Column::StudentId.eq(params.student_id))
            .filter(entity::enrollment::Column::CourseId.eq(params.course_id))
            .filter(entity::enrollment::Column::Semester.eq(&params.semester))
            .count(&txn)
            .await?
            > 0;
        if duplicate {
            return Err(AppError::Conflict(
                "Student is already enrolled in this course for this semester".to_string(),
            ));
        }

        let enrolled = entity::prelude::Enrollment::find()
            .filter(entity::enrollment::Column::CourseId.eq(params.course_id))
            .filter(entity::enrollment::Column::Status.eq(EnrollmentStatus::Enrolled))
            .count(&txn)
            .await?;
        if enrolled >= course.max_capacity as u64 {
            return Err(AppError::Conflict(
                "Course has reached its maximum capacity".to_string(),
            ));
        }

        let entity = entity::enrollment::ActiveModel {
            student_id: ActiveValue::Set(params.student_id),
            course_id: ActiveValue::Set(params.course_id),
            grade: ActiveValue::Set(None),
            semester: ActiveValue::Set(params.semester),
            enrollment_date: ActiveValue::Set(chrono::Utc::now()),
            status: ActiveValue::Set(EnrollmentStatus::Enrolled),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(Enrollment::from_entity(entity))
    }

    /// Finds an enrollment by its id.
    ///
    /// # Returns
    /// - `Ok(Some(Enrollment))` - Enrollment found
    /// - `Ok(None)` - No enrollment with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Enrollment>, AppError> {
        let entity = entity::prelude::Enrollment::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Enrollment::from_entity))
    }

    /// Gets all enrollments ordered by id.
    ///
    /// # Returns
    /// - `Ok(Vec<Enrollment>)` - All enrollments (empty if none exist)
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Enrollment>, AppError> {
        let entities = entity::prelude::Enrollment::find()
            .order_by_asc(entity::enrollment::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Enrollment::from_entity).collect())
    }

    /// Gets all enrollments of a student, ordered by id.
    ///
    /// # Arguments
    /// - `student_id` - Id of the student profile
    ///
    /// # Returns
    /// - `Ok(Vec<Enrollment>)` - The student's enrollments (empty if none exist)
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_student_id(&self, student_id: i32) -> Result<Vec<Enrollment>, AppError> {
        let entities = entity::prelude::Enrollment::find()
            .filter(entity::enrollment::Column::StudentId.eq(student_id))
            .order_by_asc(entity::enrollment::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Enrollment::from_entity).collect())
    }

    /// Gets all enrollments of a course, ordered by id.
    ///
    /// # Arguments
    /// - `course_id` - Id of the course
    ///
    /// # Returns
    /// - `Ok(Vec<Enrollment>)` - The course's enrollments (empty if none exist)
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_course_id(&self, course_id: i32) -> Result<Vec<Enrollment>, AppError> {
        let entities = entity::prelude::Enrollment::find()
            .filter(entity::enrollment::Column::CourseId.eq(course_id))
            .order_by_asc(entity::enrollment::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Enrollment::from_entity).collect())
    }

    /// Gets all enrollments in courses owned by an instructor, ordered by id.
    ///
    /// # Arguments
    /// - `instructor_id` - Id of the instructor profile
    ///
    /// # Returns
    /// - `Ok(Vec<Enrollment>)` - Enrollments across the instructor's courses
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_instructor_id(
        &self,
        instructor_id: i32,
    ) -> Result<Vec<Enrollment>, AppError> {
        let course_ids: Vec<i32> = entity::prelude::Course::find()
            .filter(entity::course::Column::InstructorId.eq(instructor_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|course| course.id)
            .collect();

        if course_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Enrollment::find()
            .filter(entity::enrollment::Column::CourseId.is_in(course_ids))
            .order_by_asc(entity::enrollment::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Enrollment::from_entity).collect())
    }

    /// Persists a status and grade computed by the rules engine.
    ///
    /// The caller (service layer) is responsible for having validated the
    /// transition; this method writes the resulting state verbatim.
    ///
    /// # Arguments
    /// - `id` - Id of the enrollment to update
    /// - `status` - Status to store
    /// - `grade` - Grade to store (`None` clears any existing grade)
    ///
    /// # Returns
    /// - `Ok(Some(Enrollment))` - The updated enrollment
    /// - `Ok(None)` - No enrollment with that id
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn set_status(
        &self,
        id: i32,
        status: EnrollmentStatus,
        grade: Option<String>,
    ) -> Result<Option<Enrollment>, AppError> {
        let Some(enrollment) = entity::prelude::Enrollment::find_by_id(id).one(self.db).await?
        else {
            return Ok(None);
        };

        let mut active: entity::enrollment::ActiveModel = enrollment.into();
        active.status = ActiveValue::Set(status);
        active.grade = ActiveValue::Set(grade);

        let updated = active.update(self.db).await?;

        Ok(Some(Enrollment::from_entity(updated)))
    }

    /// Deletes an enrollment.
    ///
    /// # Arguments
    /// - `id` - Id of the enrollment to delete
    ///
    /// # Returns
    /// - `Ok(true)` - Enrollment deleted
    /// - `Ok(false)` - No enrollment with that id
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Enrollment::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
