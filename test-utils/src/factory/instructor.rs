//! Instructor factory for creating test instructor profile entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test instructor profiles with customizable fields.
///
/// The backing account must already exist; pass its id as `user_id`.
pub struct InstructorFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    specialty: String,
    user_id: i32,
}

impl<'a> InstructorFactory<'a> {
    /// Creates a new InstructorFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Instructor {id}"` where id is auto-incremented
    /// - specialty: `"Computer Science"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Id of the backing account
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Instructor {}", id),
            specialty: "Computer Science".to_string(),
            user_id,
        }
    }

    /// Sets the display name for the instructor.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the specialty for the instructor.
    pub fn specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialty = specialty.into();
        self
    }

    /// Builds and inserts the instructor entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::instructor::Model)` - Created instructor entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::instructor::Model, DbErr> {
        entity::instructor::ActiveModel {
            name: ActiveValue::Set(self.name),
            specialty: ActiveValue::Set(self.specialty),
            user_id: ActiveValue::Set(self.user_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an instructor profile with default values for an existing account.
///
/// Shorthand for `InstructorFactory::new(db, user_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Id of the backing account
///
/// # Returns
/// - `Ok(entity::instructor::Model)` - Created instructor entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_instructor(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::instructor::Model, DbErr> {
    InstructorFactory::new(db, user_id).build().await
}
