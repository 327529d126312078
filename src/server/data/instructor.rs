//! Instructor data repository for database operations.
//!
//! Instructor creation mirrors student creation: account + profile in one
//! transaction. Deletion tears down the instructor's courses and their
//! enrollments before the profile row.

use entity::user::Role;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};

use crate::server::{
    data::user::{ensure_email_free, ensure_username_free},
    error::AppError,
    model::instructor::{CreateInstructorParams, Instructor, UpdateInstructorParams},
};

/// Repository providing database operations for instructor profiles.
pub struct InstructorRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InstructorRepository<'a> {
    /// Creates a new InstructorRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an instructor profile together with its backing account.
    ///
    /// Checks username and email uniqueness, then inserts the account (role
    /// `instructor`) and the profile in one transaction.
    ///
    /// # Arguments
    /// - `params` - Account and profile fields with the password already hashed
    ///
    /// # Returns
    /// - `Ok(Instructor)` - The created instructor profile
    /// - `Err(AppError::Conflict)` - Username or email already taken
    /// - `Err(AppError::DbErr)` - Database error; neither row is kept
    pub async fn create(&self, params: CreateInstructorParams) -> Result<Instructor, AppError> {
        let txn = self.db.begin().await?;

        ensure_username_free(&txn, &params.username, None).await?;
        ensure_email_free(&txn, &params.email, None).await?;

        let user = entity::user::ActiveModel {
            username: ActiveValue::Set(params.username),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            role: ActiveValue::Set(Role::Instructor),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let instructor = entity::instructor::ActiveModel {
            name: ActiveValue::Set(params.name),
            specialty: ActiveValue::Set(params.specialty),
            user_id: ActiveValue::Set(user.id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(Instructor::from_entity(instructor))
    }

    /// Finds an instructor profile by its id.
    ///
    /// # Returns
    /// - `Ok(Some(Instructor))` - Profile found
    /// - `Ok(None)` - No profile with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Instructor>, AppError> {
        let entity = entity::prelude::Instructor::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Instructor::from_entity))
    }

    /// Finds the instructor profile owned by an account.
    ///
    /// # Arguments
    /// - `user_id` - Id of the backing account
    ///
    /// # Returns
    /// - `Ok(Some(Instructor))` - Profile found
    /// - `Ok(None)` - The account has no instructor profile
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_by_user_id(&self, user_id: i32) -> Result<Option<Instructor>, AppError> {
        let entity = entity::prelude::Instructor::find()
            .filter(entity::instructor::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Instructor::from_entity))
    }

    /// Gets all instructor profiles ordered by id.
    ///
    /// # Returns
    /// - `Ok(Vec<Instructor>)` - All profiles (empty if none exist)
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Instructor>, AppError> {
        let entities = entity::prelude::Instructor::find()
            .order_by_asc(entity::instructor::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Instructor::from_entity).collect())
    }

    /// Applies a partial update to an instructor profile.
    ///
    /// # Arguments
    /// - `params` - Update parameters with `None` for untouched fields
    ///
    /// # Returns
    /// - `Ok(Some(Instructor))` - The updated profile
    /// - `Ok(None)` - No profile with that id
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update(
        &self,
        params: UpdateInstructorParams,
    ) -> Result<Option<Instructor>, AppError> {
        let Some(instructor) =
            entity::prelude::Instructor::find_by_id(params.id).one(self.db).await?
        else {
            return Ok(None);
        };

        let mut active: entity::instructor::ActiveModel = instructor.clone().into();
        let mut changed = false;

        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
            changed = true;
        }
        if let Some(specialty) = params.specialty {
            active.specialty = ActiveValue::Set(specialty);
            changed = true;
        }

        if !changed {
            return Ok(Some(Instructor::from_entity(instructor)));
        }

        let updated = active.update(self.db).await?;

        Ok(Some(Instructor::from_entity(updated)))
    }

    /// Deletes an instructor profile, its courses, and their enrollments.
    ///
    /// The backing account is left in place.
    ///
    /// # Arguments
    /// - `id` - Id of the profile to delete
    ///
    /// # Returns
    /// - `Ok(true)` - Profile, courses and enrollments deleted
    /// - `Ok(false)` - No profile with that id
    /// - `Err(AppError::DbErr)` - Database error; nothing was deleted
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let Some(instructor) = entity::prelude::Instructor::find_by_id(id).one(self.db).await?
        else {
            return Ok(false);
        };

        let txn = self.db.begin().await?;

        let course_ids: Vec<i32> = entity::prelude::Course::find()
            .filter(entity::course::Column::InstructorId.eq(instructor.id))
            .all(&txn)
            .await?
            .into_iter()
            .map(|course| course.id)
            .collect();

        if !course_ids.is_empty() {
            entity::prelude::Enrollment::delete_many()
                .filter(entity::enrollment::Column::CourseId.is_in(course_ids))
                .exec(&txn)
                .await?;
            entity::prelude::Course::delete_many()
                .filter(entity::course::Column::InstructorId.eq(instructor.id))
                .exec(&txn)
                .await?;
        }

        entity::prelude::Instructor::delete_by_id(instructor.id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(true)
    }
}
