//! Account data repository for database operations.
//!
//! This module provides the `UserRepository` for managing account records. It handles
//! account creation, lookups, partial updates, and deletion with proper conversion
//! between entity models and domain models at the infrastructure boundary. Deleting an
//! account also removes the linked profile and everything that profile owns, inside one
//! transaction.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::{
    error::AppError,
    model::user::{Account, CreateAccountParams, UpdateAccountParams},
};

/// Repository providing database operations for account management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an account after checking username and email uniqueness.
    ///
    /// # Arguments
    /// - `params` - Account fields with the password already hashed
    ///
    /// # Returns
    /// - `Ok(Account)` - The created account
    /// - `Err(AppError::Conflict)` - Username or email already taken
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateAccountParams) -> Result<Account, AppError> {
        ensure_username_free(self.db, &params.username, None).await?;
        ensure_email_free(self.db, &params.email, None).await?;

        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(params.username),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            role: ActiveValue::Set(params.role),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Account::from_entity(entity))
    }

    /// Finds an account by its id.
    ///
    /// # Returns
    /// - `Ok(Some(Account))` - Account found
    /// - `Ok(None)` - No account with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Account>, AppError> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Account::from_entity))
    }

    /// Finds an account by its email address.
    ///
    /// Used by login, which identifies accounts by email.
    ///
    /// # Returns
    /// - `Ok(Some(Account))` - Account found
    /// - `Ok(None)` - No account with that email
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AppError> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(Account::from_entity))
    }

    /// Gets all accounts ordered by id.
    ///
    /// # Returns
    /// - `Ok(Vec<Account>)` - All accounts (empty if none exist)
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Account>, AppError> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Account::from_entity).collect())
    }

    /// Applies a partial update to an account.
    ///
    /// Only fields present in the params are written; uniqueness is re-checked
    /// for a changed username or email, excluding the account itself.
    ///
    /// # Arguments
    /// - `params` - Update parameters with `None` for untouched fields
    ///
    /// # Returns
    /// - `Ok(Some(Account))` - The updated account
    /// - `Ok(None)` - No account with that id
    /// - `Err(AppError::Conflict)` - New username or email already taken
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update(&self, params: UpdateAccountParams) -> Result<Option<Account>, AppError> {
        let Some(user) = entity::prelude::User::find_by_id(params.id).one(self.db).await? else {
            return Ok(None);
        };

        if let Some(ref username) = params.username {
            if username != &user.username {
                ensure_username_free(self.db, username, Some(user.id)).await?;
            }
        }
        if let Some(ref email) = params.email {
            if email != &user.email {
                ensure_email_free(self.db, email, Some(user.id)).await?;
            }
        }

        let mut active: entity::user::ActiveModel = user.clone().into();
        let mut changed = false;

        if let Some(username) = params.username {
            active.username = ActiveValue::Set(username);
            changed = true;
        }
        if let Some(email) = params.email {
            active.email = ActiveValue::Set(email);
            changed = true;
        }
        if let Some(password_hash) = params.password_hash {
            active.password_hash = ActiveValue::Set(password_hash);
            changed = true;
        }
        if let Some(role) = params.role {
            active.role = ActiveValue::Set(role);
            changed = true;
        }

        if !changed {
            return Ok(Some(Account::from_entity(user)));
        }

        let updated = active.update(self.db).await?;

        Ok(Some(Account::from_entity(updated)))
    }

    /// Deletes an account and everything it owns.
    ///
    /// Removes the linked student profile (with its enrollments) or instructor
    /// profile (with its courses and their enrollments) before the account row,
    /// all inside one transaction.
    ///
    /// # Arguments
    /// - `id` - Id of the account to delete
    ///
    /// # Returns
    /// - `Ok(true)` - Account and dependents deleted
    /// - `Ok(false)` - No account with that id
    /// - `Err(AppError::DbErr)` - Database error; nothing was deleted
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let Some(user) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(false);
        };

        let txn = self.db.begin().await?;

        if let Some(student) = entity::prelude::Student::find()
            .filter(entity::student::Column::UserId.eq(user.id))
            .one(&txn)
            .await?
        {
            entity::prelude::Enrollment::delete_many()
                .filter(entity::enrollment::Column::StudentId.eq(student.id))
                .exec(&txn)
                .await?;
            entity::prelude::Student::delete_by_id(student.id)
                .exec(&txn)
                .await?;
        }

        if let Some(instructor) = entity::prelude::Instructor::find()
            .filter(entity::instructor::Column::UserId.eq(user.id))
            .one(&txn)
            .await?
        {
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
        }

        entity::prelude::User::delete_by_id(user.id).exec(&txn).await?;

        txn.commit().await?;

        Ok(true)
    }
}

/// Fails with `Conflict` if the username is taken by another account.
pub(crate) async fn ensure_username_free<C: ConnectionTrait>(
    conn: &C,
    username: &str,
    exclude_id: Option<i32>,
) -> Result<(), AppError> {
    let mut query = entity::prelude::User::find()
        .filter(entity::user::Column::Username.eq(username));
    if let Some(id) = exclude_id {
        query = query.filter(entity::user::Column::Id.ne(id));
    }

    if query.count(conn).await? > 0 {
        return Err(AppError::Conflict("Username already exists".to_string()));
    }

    Ok(())
}

/// Fails with `Conflict` if the email is taken by another account.
pub(crate) async fn ensure_email_free<C: ConnectionTrait>(
    conn: &C,
    email: &str,
    exclude_id: Option<i32>,
) -> Result<(), AppError> {
    let mut query =
        entity::prelude::User::find().filter(entity::user::Column::Email.eq(email));
    if let Some(id) = exclude_id {
        query = query.filter(entity::user::Column::Id.ne(id));
    }

    if query.count(conn).await? > 0 {
        return Err(AppError::Conflict("Email already exists".to_string()));
    }

    Ok(())
}
