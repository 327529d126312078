//! Enrollment management service.
//!
//! Creation constraints (duplicate triple, capacity) are enforced inside the
//! repository's transaction; this service owns the status state machine and
//! decides which rows a caller may list.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::enrollment::EnrollmentRepository,
    error::AppError,
    model::enrollment::{
        apply_status_change, CreateEnrollmentParams, Enrollment, UpdateEnrollmentParams,
    },
};

pub struct EnrollmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EnrollmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all enrollments.
    pub async fn get_all(&self) -> Result<Vec<Enrollment>, AppError> {
        EnrollmentRepository::new(self.db).get_all().await
    }

    /// Gets an enrollment by id.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Enrollment>, AppError> {
        EnrollmentRepository::new(self.db).find_by_id(id).await
    }

    /// Gets all enrollments of a student.
    pub async fn get_by_student_id(&self, student_id: i32) -> Result<Vec<Enrollment>, AppError> {
        EnrollmentRepository::new(self.db).get_by_student_id(student_id).await
    }

    /// Gets all enrollments of a course.
    pub async fn get_by_course_id(&self, course_id: i32) -> Result<Vec<Enrollment>, AppError> {
        EnrollmentRepository::new(self.db).get_by_course_id(course_id).await
    }

    /// Gets all enrollments in courses owned by an instructor.
    pub async fn get_by_instructor_id(
        &self,
        instructor_id: i32,
    ) -> Result<Vec<Enrollment>, AppError> {
        EnrollmentRepository::new(self.db).get_by_instructor_id(instructor_id).await
    }

    /// Creates an enrollment.
    ///
    /// The repository enforces existence, uniqueness and capacity atomically;
    /// the new row always starts as `enrolled` with no grade.
    pub async fn create(&self, params: CreateEnrollmentParams) -> Result<Enrollment, AppError> {
        if params.semester.trim().is_empty() {
            return Err(AppError::BadRequest("Semester is required".to_string()));
        }

        EnrollmentRepository::new(self.db).create(params).await
    }

    /// Applies a status/grade change to an enrollment.
    ///
    /// Runs the requested change through the state machine against the stored
    /// state, then persists the result.
    ///
    /// # Returns
    /// - `Ok(Some(Enrollment))` - The updated enrollment
    /// - `Ok(None)` - No enrollment with that id
    /// - `Err(AppError::BadRequest)` - The change violates the transition rules
    pub async fn update(
        &self,
        params: UpdateEnrollmentParams,
    ) -> Result<Option<Enrollment>, AppError> {
        let repo = EnrollmentRepository::new(self.db);

        let Some(current) = repo.find_by_id(params.id).await? else {
            return Ok(None);
        };

        let (status, grade) = apply_status_change(
            current.status,
            current.grade,
            params.status,
            params.grade,
        )?;

        repo.set_status(params.id, status, grade).await
    }

    /// Deletes an enrollment.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        EnrollmentRepository::new(self.db).delete(id).await
    }
}
