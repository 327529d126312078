//! Account management service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{Account, CreateAccountParams, UpdateAccountParams},
    service::auth::hash_password,
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all accounts.
    pub async fn get_all(&self) -> Result<Vec<Account>, AppError> {
        UserRepository::new(self.db).get_all().await
    }

    /// Gets an account by id.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Account>, AppError> {
        UserRepository::new(self.db).find_by_id(id).await
    }

    /// Creates an account with an arbitrary role (admin-only endpoint).
    ///
    /// Validates required fields, hashes the password, and delegates the
    /// uniqueness checks to the repository.
    pub async fn create(
        &self,
        username: &str,
        email: &str,
        password: &str,
        role: entity::user::Role,
    ) -> Result<Account, AppError> {
        if username.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
            return Err(AppError::BadRequest(
                "Username, email and password are required".to_string(),
            ));
        }
        if !email.contains('@') {
            return Err(AppError::BadRequest("Invalid email format".to_string()));
        }

        UserRepository::new(self.db)
            .create(CreateAccountParams {
                username: username.trim().to_string(),
                email: email.trim().to_lowercase(),
                password_hash: hash_password(password)?,
                role,
            })
            .await
    }

    /// Applies a partial update to an account.
    ///
    /// A new password arrives in plaintext and is hashed here; the role, when
    /// present, has already been authorized by the controller.
    pub async fn update(
        &self,
        id: i32,
        username: Option<String>,
        email: Option<String>,
        password: Option<String>,
        role: Option<entity::user::Role>,
    ) -> Result<Option<Account>, AppError> {
        let password_hash = match password {
            Some(password) if !password.is_empty() => Some(hash_password(&password)?),
            Some(_) => {
                return Err(AppError::BadRequest("Password cannot be empty".to_string()));
            }
            None => None,
        };

        UserRepository::new(self.db)
            .update(UpdateAccountParams {
                id,
                username,
                email,
                password_hash,
                role,
            })
            .await
    }

    /// Deletes an account and everything it owns.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        UserRepository::new(self.db).delete(id).await
    }
}
