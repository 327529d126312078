//! Student profile management service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::student::StudentRepository,
    error::AppError,
    model::student::{CreateStudentParams, Student, UpdateStudentParams},
    service::auth::hash_password,
};

pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all student profiles.
    pub async fn get_all(&self) -> Result<Vec<Student>, AppError> {
        StudentRepository::new(self.db).get_all().await
    }

    /// Gets a student profile by id.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Student>, AppError> {
        StudentRepository::new(self.db).find_by_id(id).await
    }

    /// Gets the student profile owned by an account.
    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Option<Student>, AppError> {
        StudentRepository::new(self.db).find_by_user_id(user_id).await
    }

    /// Creates a student profile with its backing account.
    ///
    /// Validates the payload, hashes the initial password, and lets the
    /// repository insert both rows in one transaction.
    pub async fn create(
        &self,
        username: &str,
        email: &str,
        password: &str,
        name: &str,
        age: i32,
        student_code: &str,
        enrollment_year: i32,
    ) -> Result<Student, AppError> {
        if username.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
            return Err(AppError::BadRequest(
                "Username, email and password are required".to_string(),
            ));
        }
        if !email.contains('@') {
            return Err(AppError::BadRequest("Invalid email format".to_string()));
        }
        if name.trim().is_empty() || student_code.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Name and student code are required".to_string(),
            ));
        }

        StudentRepository::new(self.db)
            .create(CreateStudentParams {
                username: username.trim().to_string(),
                email: email.trim().to_lowercase(),
                password_hash: hash_password(password)?,
                name: name.trim().to_string(),
                age,
                student_code: student_code.trim().to_string(),
                enrollment_year,
            })
            .await
    }

    /// Applies a partial update to a student profile.
    pub async fn update(&self, params: UpdateStudentParams) -> Result<Option<Student>, AppError> {
        StudentRepository::new(self.db).update(params).await
    }

    /// Deletes a student profile and its enrollments.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        StudentRepository::new(self.db).delete(id).await
    }
}
