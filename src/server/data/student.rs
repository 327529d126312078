//! Student data repository for database operations.
//!
//! Student creation is a two-row write (account + profile) and runs inside a
//! transaction so a conflict on either row leaves no partial record behind.

use entity::user::Role;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::{
    data::user::{ensure_email_free, ensure_username_free},
    error::AppError,
    model::student::{CreateStudentParams, Student, UpdateStudentParams},
};

/// Repository providing database operations for student profiles.
pub struct StudentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentRepository<'a> {
    /// Creates a new StudentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a student profile together with its backing account.
    ///
    /// Checks username, email and student code uniqueness, then inserts the
    /// account (role `student`) and the profile in one transaction.
    ///
    /// # Arguments
    /// - `params` - Account and profile fields with the password already hashed
    ///
    /// # Returns
    /// - `Ok(Student)` - The created student profile
    /// - `Err(AppError::Conflict)` - Username, email or student code already taken
    /// - `Err(AppError::DbErr)` - Database error; neither row is kept
    pub async fn create(&self, params: CreateStudentParams) -> Result<Student, AppError> {
        let txn = self.db.begin().await?;

        ensure_username_free(&txn, &params.username, None).await?;
        ensure_email_free(&txn, &params.email, None).await?;
        ensure_student_code_free(&txn, &params.student_code, None).await?;

        let user = entity::user::ActiveModel {
            username: ActiveValue::Set(params.username),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            role: ActiveValue::Set(Role::Student),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let student = entity::student::ActiveModel {
            name: ActiveValue::Set(params.name),
            age: ActiveValue::Set(params.age),
            student_code: ActiveValue::Set(params.student_code),
            enrollment_year: ActiveValue::Set(params.enrollment_year),
            user_id: ActiveValue::Set(user.id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(Student::from_entity(student))
    }

    /// Finds a student profile by its id.
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - Profile found
    /// - `Ok(None)` - No profile with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Student>, AppError> {
        let entity = entity::prelude::Student::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Student::from_entity))
    }

    /// Finds the student profile owned by an account.
    ///
    /// # Arguments
    /// - `user_id` - Id of the backing account
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - Profile found
    /// - `Ok(None)` - The account has no student profile
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_by_user_id(&self, user_id: i32) -> Result<Option<Student>, AppError> {
        let entity = entity::prelude::Student::find()
            .filter(entity::student::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Student::from_entity))
    }

    /// Gets all student profiles ordered by id.
    ///
    /// # Returns
    /// - `Ok(Vec<Student>)` - All profiles (empty if none exist)
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Student>, AppError> {
        let entities = entity::prelude::Student::find()
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Student::from_entity).collect())
    }

    /// Applies a partial update to a student profile.
    ///
    /// Only fields present in the params are written; a changed student code is
    /// re-checked for uniqueness, excluding the profile itself.
    ///
    /// # Arguments
    /// - `params` - Update parameters with `None` for untouched fields
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - The updated profile
    /// - `Ok(None)` - No profile with that id
    /// - `Err(AppError::Conflict)` - New student code already taken
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update(&self, params: UpdateStudentParams) -> Result<Option<Student>, AppError> {
        let Some(student) = entity::prelude::Student::find_by_id(params.id).one(self.db).await?
        else {
            return Ok(None);
        };

        if let Some(ref student_code) = params.student_code {
            if student_code != &student.student_code {
                ensure_student_code_free(self.db, student_code, Some(student.id)).await?;
            }
        }

        let mut active: entity::student::ActiveModel = student.clone().into();
        let mut changed = false;

        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
            changed = true;
        }
        if let Some(age) = params.age {
            active.age = ActiveValue::Set(age);
            changed = true;
        }
        if let Some(student_code) = params.student_code {
            active.student_code = ActiveValue::Set(student_code);
            changed = true;
        }
        if let Some(enrollment_year) = params.enrollment_year {
            active.enrollment_year = ActiveValue::Set(enrollment_year);
            changed = true;
        }

        if !changed {
            return Ok(Some(Student::from_entity(student)));
        }

        let updated = active.update(self.db).await?;

        Ok(Some(Student::from_entity(updated)))
    }

    /// Deletes a student profile and its enrollments.
    ///
    /// The backing account is left in place; deleting the account is a
    /// separate, admin-only operation.
    ///
    /// # Arguments
    /// - `id` - Id of the profile to delete
    ///
    /// # Returns
    /// - `Ok(true)` - Profile and enrollments deleted
    /// - `Ok(false)` - No profile with that id
    /// - `Err(AppError::DbErr)` - Database error; nothing was deleted
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let Some(student) = entity::prelude::Student::find_by_id(id).one(self.db).await? else {
            return Ok(false);
        };

        let txn = self.db.begin().await?;

        entity::prelude::Enrollment::delete_many()
            .filter(entity::enrollment::Column::StudentId.eq(student.id))
            .exec(&txn)
            .await?;
        entity::prelude::Student::delete_by_id(student.id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(true)
    }
}

/// Fails with `Conflict` if the student code is taken by another profile.
async fn ensure_student_code_free<C: ConnectionTrait>(
    conn: &C,
    student_code: &str,
    exclude_id: Option<i32>,
) -> Result<(), AppError> {
    let mut query = entity::prelude::Student::find()
        .filter(entity::student::Column::StudentCode.eq(student_code));
    if let Some(id) = exclude_id {
        query = query.filter(entity::student::Column::Id.ne(id));
    }

    if query.count(conn).await? > 0 {
        return Err(AppError::Conflict("Student code already exists".to_string()));
    }

    Ok(())
}
