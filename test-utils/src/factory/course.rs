//! Course factory for creating test course entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test courses with customizable fields.
///
/// The owning instructor profile must already exist; pass its id as
/// `instructor_id`.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::course::CourseFactory;
///
/// let course = CourseFactory::new(&db, instructor.id)
///     .title("Distributed Systems")
///     .max_capacity(2)
///     .build()
///     .await?;
/// ```
pub struct CourseFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    course_code: String,
    description: String,
    credit_hours: i32,
    max_capacity: i32,
    instructor_id: i32,
}

impl<'a> CourseFactory<'a> {
    /// Creates a new CourseFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Course {id}"` where id is auto-incremented
    /// - course_code: `"CS{id}"`
    /// - description: `"A test course"`
    /// - credit_hours: `3`
    /// - max_capacity: `30`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `instructor_id` - Id of the owning instructor profile
    pub fn new(db: &'a DatabaseConnection, instructor_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Course {}", id),
            course_code: format!("CS{}", id),
            description: "A test course".to_string(),
            credit_hours: 3,
            max_capacity: 30,
            instructor_id,
        }
    }

    /// Sets the title for the course.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the unique course code.
    pub fn course_code(mut self, course_code: impl Into<String>) -> Self {
        self.course_code = course_code.into();
        self
    }

    /// Sets the description for the course.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the credit hours for the course.
    pub fn credit_hours(mut self, credit_hours: i32) -> Self {
        self.credit_hours = credit_hours;
        self
    }

    /// Sets the maximum enrollment capacity for the course.
    pub fn max_capacity(mut self, max_capacity: i32) -> Self {
        self.max_capacity = max_capacity;
        self
    }

    /// Builds and inserts the course entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::course::Model)` - Created course entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::course::Model, DbErr> {
        entity::course::ActiveModel {
            title: ActiveValue::Set(self.title),
            course_code: ActiveValue::Set(self.course_code),
            description: ActiveValue::Set(self.description),
            credit_hours: ActiveValue::Set(self.credit_hours),
            max_capacity: ActiveValue::Set(self.max_capacity),
            instructor_id: ActiveValue::Set(self.instructor_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a course with default values for an existing instructor.
///
/// Shorthand for `CourseFactory::new(db, instructor_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `instructor_id` - Id of the owning instructor profile
///
/// # Returns
/// - `Ok(entity::course::Model)` - Created course entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_course(
    db: &DatabaseConnection,
    instructor_id: i32,
) -> Result<entity::course::Model, DbErr> {
    CourseFactory::new(db, instructor_id).build().await
}
