//! Student factory for creating test student profile entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test student profiles with customizable fields.
///
/// The backing account must already exist; pass its id as `user_id`.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::student::StudentFactory;
///
/// let student = StudentFactory::new(&db, user.id)
///     .name("Ada Lovelace")
///     .student_code("STU-1815")
///     .build()
///     .await?;
/// ```
pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    age: i32,
    student_code: String,
    enrollment_year: i32,
    user_id: i32,
}

impl<'a> StudentFactory<'a> {
    /// Creates a new StudentFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Student {id}"` where id is auto-incremented
    /// - age: `20`
    /// - student_code: `"STU-{id}"`
    /// - enrollment_year: `2026`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Id of the backing account
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Student {}", id),
            age: 20,
            student_code: format!("STU-{}", id),
            enrollment_year: 2026,
            user_id,
        }
    }

    /// Sets the display name for the student.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the age for the student.
    pub fn age(mut self, age: i32) -> Self {
        self.age = age;
        self
    }

    /// Sets the external student code.
    pub fn student_code(mut self, student_code: impl Into<String>) -> Self {
        self.student_code = student_code.into();
        self
    }

    /// Sets the enrollment year.
    pub fn enrollment_year(mut self, enrollment_year: i32) -> Self {
        self.enrollment_year = enrollment_year;
        self
    }

    /// Builds and inserts the student entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::student::Model)` - Created student entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::student::Model, DbErr> {
        entity::student::ActiveModel {
            name: ActiveValue::Set(self.name),
            age: ActiveValue::Set(self.age),
            student_code: ActiveValue::Set(self.student_code),
            enrollment_year: ActiveValue::Set(self.enrollment_year),
            user_id: ActiveValue::Set(self.user_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a student profile with default values for an existing account.
///
/// Shorthand for `StudentFactory::new(db, user_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Id of the backing account
///
/// # Returns
/// - `Ok(entity::student::Model)` - Created student entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_student(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db, user_id).build().await
}
