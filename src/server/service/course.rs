//! Course management service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::course::CourseRepository,
    error::AppError,
    model::course::{Course, CreateCourseParams, UpdateCourseParams},
};

pub struct CourseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all courses.
    pub async fn get_all(&self) -> Result<Vec<Course>, AppError> {
        CourseRepository::new(self.db).get_all().await
    }

    /// Gets a course by id.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Course>, AppError> {
        CourseRepository::new(self.db).find_by_id(id).await
    }

    /// Gets all courses owned by an instructor.
    pub async fn get_by_instructor_id(&self, instructor_id: i32) -> Result<Vec<Course>, AppError> {
        CourseRepository::new(self.db).get_by_instructor_id(instructor_id).await
    }

    /// Creates a course after validating its numeric fields.
    ///
    /// # Returns
    /// - `Ok(Course)` - The created course
    /// - `Err(AppError::BadRequest)` - Capacity or credit hours not positive,
    ///   or a required text field empty
    /// - `Err(AppError::NotFound)` - The referenced instructor does not exist
    /// - `Err(AppError::Conflict)` - Course code already taken
    pub async fn create(&self, params: CreateCourseParams) -> Result<Course, AppError> {
        if params.title.trim().is_empty() || params.course_code.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Title and course code are required".to_string(),
            ));
        }
        if params.max_capacity <= 0 {
            return Err(AppError::BadRequest(
                "max_capacity must be a positive integer".to_string(),
            ));
        }
        if params.credit_hours <= 0 {
            return Err(AppError::BadRequest(
                "credit_hours must be a positive integer".to_string(),
            ));
        }

        CourseRepository::new(self.db).create(params).await
    }

    /// Applies a partial update to a course, re-validating changed numeric fields.
    pub async fn update(&self, params: UpdateCourseParams) -> Result<Option<Course>, AppError> {
        if let Some(max_capacity) = params.max_capacity {
            if max_capacity <= 0 {
                return Err(AppError::BadRequest(
                    "max_capacity must be a positive integer".to_string(),
                ));
            }
        }
        if let Some(credit_hours) = params.credit_hours {
            if credit_hours <= 0 {
                return Err(AppError::BadRequest(
                    "credit_hours must be a positive integer".to_string(),
                ));
            }
        }

        CourseRepository::new(self.db).update(params).await
    }

    /// Deletes a course and its enrollments.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        CourseRepository::new(self.db).delete(id).await
    }
}
