//! Credential service: password hashing, signup, login, and token validation.
//!
//! Passwords are hashed with Argon2id and a per-password random salt; hashes
//! are never reversible and never serialized. Tokens are HS256 JWTs whose key
//! material and lifetime come from configuration via [`TokenKeys`].

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use entity::user::Role;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::{
        auth::TokenKeys,
        user::{Account, CreateAccountParams},
    },
};

/// Service handling signup, login and bearer-token validation.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    keys: &'a TokenKeys,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `keys` - Token key material from the application state
    pub fn new(db: &'a DatabaseConnection, keys: &'a TokenKeys) -> Self {
        Self { db, keys }
    }

    /// Registers a new student account and issues a token for it.
    ///
    /// Signup always creates a `student` role account; elevated accounts are
    /// created by admins through the user endpoints.
    ///
    /// # Arguments
    /// - `username` - Desired unique username
    /// - `email` - Desired unique email
    /// - `password` - Plaintext password, hashed before storage
    ///
    /// # Returns
    /// - `Ok((Account, String))` - The created account and a bearer token
    /// - `Err(AppError::BadRequest)` - A required field is empty or malformed
    /// - `Err(AppError::Conflict)` - Username or email already taken
    pub async fn signup(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<(Account, String), AppError> {
        if username.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
            return Err(AppError::BadRequest(
                "Username, email and password are required".to_string(),
            ));
        }
        if !email.contains('@') {
            return Err(AppError::BadRequest("Invalid email format".to_string()));
        }

        let repo = UserRepository::new(self.db);

        let account = repo
            .create(CreateAccountParams {
                username: username.trim().to_string(),
                email: email.trim().to_lowercase(),
                password_hash: hash_password(password)?,
                role: Role::Student,
            })
            .await?;

        let token = self.issue_token(&account)?;

        Ok((account, token))
    }

    /// Authenticates an account by email and password.
    ///
    /// An unknown email and a wrong password produce the same error so the
    /// endpoint cannot be used to probe which emails are registered.
    ///
    /// # Arguments
    /// - `email` - Email of the account
    /// - `password` - Plaintext password to verify
    ///
    /// # Returns
    /// - `Ok((Account, String))` - The account and a fresh bearer token
    /// - `Err(AppError::BadRequest)` - Email or password missing
    /// - `Err(AppError::AuthErr(BadCredentials))` - Unknown email or wrong password
    pub async fn login(&self, email: &str, password: &str) -> Result<(Account, String), AppError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AppError::BadRequest(
                "Email and password are required".to_string(),
            ));
        }

        let repo = UserRepository::new(self.db);

        let Some(account) = repo.find_by_email(email.trim()).await? else {
            return Err(AuthError::BadCredentials.into());
        };

        if !verify_password(password, &account.password_hash)? {
            return Err(AuthError::BadCredentials.into());
        }

        let token = self.issue_token(&account)?;

        Ok((account, token))
    }

    /// Issues a signed bearer token for an account.
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded JWT carrying id, username, role and expiry
    /// - `Err(AppError::InternalError)` - Token encoding failed
    pub fn issue_token(&self, account: &Account) -> Result<String, AppError> {
        self.keys
            .issue(account)
            .map_err(|err| AppError::InternalError(format!("Failed to issue token: {}", err)))
    }

    /// Validates a bearer token and resolves it to a live account.
    ///
    /// One check: the token must decode with a valid signature and unexpired
    /// `exp`, and the referenced account must still exist. Any decode failure
    /// maps to `InvalidToken`; a missing account maps to `AccountNotFound`.
    ///
    /// # Arguments
    /// - `token` - Raw JWT from the Authorization header
    ///
    /// # Returns
    /// - `Ok(Account)` - The account the token was issued for
    /// - `Err(AppError::AuthErr)` - Invalid/expired token or vanished account
    pub async fn validate_token(&self, token: &str) -> Result<Account, AppError> {
        let claims = self.keys.decode(token).map_err(|_| AuthError::InvalidToken)?;

        let repo = UserRepository::new(self.db);

        let Some(account) = repo.find_by_id(claims.sub).await? else {
            return Err(AuthError::AccountNotFound.into());
        };

        Ok(account)
    }
}

/// Hashes a password with Argon2id and a fresh random salt.
///
/// # Arguments
/// - `password` - Plaintext password
///
/// # Returns
/// - `Ok(String)` - PHC-format hash string for storage
/// - `Err(AppError::InternalError)` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| AppError::InternalError(format!("Failed to hash password: {}", err)))
}

/// Verifies a password against a stored PHC-format hash.
///
/// # Arguments
/// - `password` - Plaintext password to check
/// - `hash` - Stored hash string
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match
/// - `Err(AppError::InternalError)` - The stored hash is not parseable
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(hash)
        .map_err(|err| AppError::InternalError(format!("Stored password hash invalid: {}", err)))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
