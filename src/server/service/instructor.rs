//! Instructor profile management service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::instructor::InstructorRepository,
    error::AppError,
    model::instructor::{CreateInstructorParams, Instructor, UpdateInstructorParams},
    service::auth::hash_password,
};

pub struct InstructorService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InstructorService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all instructor profiles.
    pub async fn get_all(&self) -> Result<Vec<Instructor>, AppError> {
        InstructorRepository::new(self.db).get_all().await
    }

    /// Gets an instructor profile by id.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Instructor>, AppError> {
        InstructorRepository::new(self.db).find_by_id(id).await
    }

    /// Gets the instructor profile owned by an account.
    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Option<Instructor>, AppError> {
        InstructorRepository::new(self.db).find_by_user_id(user_id).await
    }

    /// Creates an instructor profile with its backing account.
    pub async fn create(
        &self,
        username: &str,
        email: &str,
        password: &str,
        name: &str,
        specialty: &str,
    ) -> Result<Instructor, AppError> {
        if username.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
            return Err(AppError::BadRequest(
                "Username, email and password are required".to_string(),
            ));
        }
        if !email.contains('@') {
            return Err(AppError::BadRequest("Invalid email format".to_string()));
        }
        if name.trim().is_empty() {
            return Err(AppError::BadRequest("Name is required".to_string()));
        }

        InstructorRepository::new(self.db)
            .create(CreateInstructorParams {
                username: username.trim().to_string(),
                email: email.trim().to_lowercase(),
                password_hash: hash_password(password)?,
                name: name.trim().to_string(),
                specialty: specialty.trim().to_string(),
            })
            .await
    }

    /// Applies a partial update to an instructor profile.
    pub async fn update(
        &self,
        params: UpdateInstructorParams,
    ) -> Result<Option<Instructor>, AppError> {
        InstructorRepository::new(self.db).update(params).await
    }

    /// Deletes an instructor profile, its courses, and their enrollments.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        InstructorRepository::new(self.db).delete(id).await
    }
}
