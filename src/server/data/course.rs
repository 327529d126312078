//! Course data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::{
    error::AppError,
    model::course::{Course, CreateCourseParams, UpdateCourseParams},
};

/// Repository providing database operations for courses.
pub struct CourseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseRepository<'a> {
    /// Creates a new CourseRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a course after checking the owning instructor and code uniqueness.
    ///
    /// # Arguments
    /// - `params` - Course fields; capacity validation happens in the service layer
    ///
    /// # Returns
    /// - `Ok(Course)` - The created course
    /// - `Err(AppError::NotFound)` - The referenced instructor does not exist
    /// - `Err(AppError::Conflict)` - Course code already taken
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateCourseParams) -> Result<Course, AppError> {
        let instructor_exists = entity::prelude::Instructor::find_by_id(params.instructor_id)
            .count(self.db)
            .await?
            > 0;
        if !instructor_exists {
            return Err(AppError::NotFound("Instructor not found".to_string()));
        }

        ensure_course_code_free(self.db, &params.course_code, None).await?;

        let entity = entity::course::ActiveModel {
            title: ActiveValue::Set(params.title),
            course_code: ActiveValue::Set(params.course_code),
            description: ActiveValue::Set(params.description),
            credit_hours: ActiveValue::Set(params.credit_hours),
            max_capacity: ActiveValue::Set(params.max_capacity),
            instructor_id: ActiveValue::Set(params.instructor_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Course::from_entity(entity))
    }

    /// Finds a course by its id.
    ///
    /// # Returns
    /// - `Ok(Some(Course))` - Course found
    /// - `Ok(None)` - No course with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Course>, AppError> {
        let entity = entity::prelude::Course::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Course::from_entity))
    }

    /// Gets all courses ordered by id.
    ///
    /// # Returns
    /// - `Ok(Vec<Course>)` - All courses (empty if none exist)
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Course>, AppError> {
        let entities = entity::prelude::Course::find()
            .order_by_asc(entity::course::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Course::from_entity).collect())
    }

    /// Gets all courses owned by an instructor, ordered by id.
    ///
    /// # Arguments
    /// - `instructor_id` - Id of the owning instructor profile
    ///
    /// # Returns
    /// - `Ok(Vec<Course>)` - The instructor's courses (empty if none exist)
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_instructor_id(&self, instructor_id: i32) -> Result<Vec<Course>, AppError> {
        let entities = entity::prelude::Course::find()
            .filter(entity::course::Column::InstructorId.eq(instructor_id))
            .order_by_asc(entity::course::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Course::from_entity).collect())
    }

    /// Applies a partial update to a course.
    ///
    /// Only fields present in the params are written; a changed course code is
    /// re-checked for uniqueness, excluding the course itself.
    ///
    /// # Arguments
    /// - `params` - Update parameters with `None` for untouched fields
    ///
    /// # Returns
    /// - `Ok(Some(Course))` - The updated course
    /// - `Ok(None)` - No course with that id
    /// - `Err(AppError::Conflict)` - New course code already taken
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update(&self, params: UpdateCourseParams) -> Result<Option<Course>, AppError> {
        let Some(course) = entity::prelude::Course::find_by_id(params.id).one(self.db).await?
        else {
            return Ok(None);
        };

        if let Some(ref course_code) = params.course_code {
            if course_code != &course.course_code {
                ensure_course_code_free(self.db, course_code, Some(course.id)).await?;
            }
        }

        let mut active: entity::course::ActiveModel = course.clone().into();
        let mut changed = false;

        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
            changed = true;
        }
        if let Some(course_code) = params.course_code {
            active.course_code = ActiveValue::Set(course_code);
            changed = true;
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(description);
            changed = true;
        }
        if let Some(credit_hours) = params.credit_hours {
            active.credit_hours = ActiveValue::Set(credit_hours);
            changed = true;
        }
        if let Some(max_capacity) = params.max_capacity {
            active.max_capacity = ActiveValue::Set(max_capacity);
            changed = true;
        }

        if !changed {
            return Ok(Some(Course::from_entity(course)));
        }

        let updated = active.update(self.db).await?;

        Ok(Some(Course::from_entity(updated)))
    }

    /// Deletes a course and its enrollments.
    ///
    /// # Arguments
    /// - `id` - Id of the course to delete
    ///
    /// # Returns
    /// - `Ok(true)` - Course and enrollments deleted
    /// - `Ok(false)` - No course with that id
    /// - `Err(AppError::DbErr)` - Database error; nothing was deleted
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let Some(course) = entity::prelude::Course::find_by_id(id).one(self.db).await? else {
            return Ok(false);
        };

        let txn = self.db.begin().await?;

        entity::prelude::Enrollment::delete_many()
            .filter(entity::enrollment::Column::CourseId.eq(course.id))
            .exec(&txn)
            .await?;
        entity::prelude::Course::delete_by_id(course.id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(true)
    }
}

/// Fails with `Conflict` if the course code is taken by another course.
async fn ensure_course_code_free<C: ConnectionTrait>(
    conn: &C,
    course_code: &str,
    exclude_id: Option<i32>,
) -> Result<(), AppError> {
    let mut query = entity::prelude::Course::find()
        .filter(entity::course::Column::CourseCode.eq(course_code));
    if let Some(id) = exclude_id {
        query = query.filter(entity::course::Column::Id.ne(id));
    }

    if query.count(conn).await? > 0 {
        return Err(AppError::Conflict("Course code already exists".to_string()));
    }

    Ok(())
}
