//! Bearer-token authentication and role/ownership authorization.
//!
//! Every protected handler constructs an [`AuthGuard`] and calls
//! [`AuthGuard::require`] with the permissions the action needs. The guard
//! validates the `Authorization: Bearer <token>` header, resolves the caller's
//! account, and checks each permission. Failure kinds are distinct on the
//! wire: a missing or bad token is 401, a valid caller without the required
//! role or ownership is 403.
//!
//! Ownership checks deliberately answer 403 (not 404) to non-admin callers
//! even when the target does not exist, so the guard never reveals whether a
//! resource exists to someone who may not see it.

use axum::http::{header, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        course::CourseRepository, enrollment::EnrollmentRepository,
        instructor::InstructorRepository, student::StudentRepository,
    },
    error::{auth::AuthError, AppError},
    model::{auth::TokenKeys, user::Account},
    service::auth::AuthService,
};

/// A capability a handler action requires.
///
/// Admin accounts satisfy every permission; the variants describe what a
/// non-admin caller must be.
pub enum Permission {
    /// Only admins.
    Admin,
    /// The account with the given id (profile self-service), or an admin.
    AccountSelfOrAdmin(i32),
    /// The owner of the given student profile, or an admin.
    StudentSelfOrAdmin(i32),
    /// The owner of the given instructor profile, or an admin.
    InstructorSelfOrAdmin(i32),
    /// Any instructor, or an admin.
    InstructorOrAdmin,
    /// The instructor owning the given course, or an admin.
    CourseOwnerOrAdmin(i32),
    /// The enrolled student or the instructor owning the enrollment's course,
    /// or an admin.
    EnrollmentPartyOrAdmin(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    keys: &'a TokenKeys,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, keys: &'a TokenKeys, headers: &'a HeaderMap) -> Self {
        Self { db, keys, headers }
    }

    /// Validates the bearer token and resolves the calling account.
    ///
    /// # Returns
    /// - `Ok(Account)` - The authenticated caller
    /// - `Err(AppError::AuthErr)` - Missing/invalid token or vanished account (401)
    pub async fn authenticate(&self) -> Result<Account, AppError> {
        let token = extract_bearer(self.headers)?;

        AuthService::new(self.db, self.keys).validate_token(token).await
    }

    /// Authenticates the caller and checks every requested permission.
    ///
    /// Admin accounts pass all checks. For other callers each permission is
    /// evaluated against the caller's role and, where relevant, ownership of
    /// the target looked up in the database.
    ///
    /// # Arguments
    /// - `permissions` - Capabilities the action requires (all must hold)
    ///
    /// # Returns
    /// - `Ok(Account)` - The authenticated, authorized caller
    /// - `Err(AppError::AuthErr)` - 401 for token failures, 403 for refused access
    pub async fn require(&self, permissions: &[Permission]) -> Result<Account, AppError> {
        let account = self.authenticate().await?;

        if account.role == entity::user::Role::Admin {
            return Ok(account);
        }

        for permission in permissions {
            self.check(&account, permission).await?;
        }

        Ok(account)
    }

    async fn check(&self, account: &Account, permission: &Permission) -> Result<(), AppError> {
        match permission {
            Permission::Admin => Err(AuthError::AccessDenied(
                account.id,
                "admin role required".to_string(),
            )
            .into()),
            Permission::AccountSelfOrAdmin(user_id) => {
                if account.id == *user_id {
                    Ok(())
                } else {
                    Err(AuthError::AccessDenied(
                        account.id,
                        format!("account {} is not the caller", user_id),
                    )
                    .into())
                }
            }
            Permission::StudentSelfOrAdmin(student_id) => {
                let student = StudentRepository::new(self.db).find_by_id(*student_id).await?;

                match student {
                    Some(student) if student.user_id == account.id => Ok(()),
                    _ => Err(AuthError::AccessDenied(
                        account.id,
                        format!("student profile {} is not owned by the caller", student_id),
                    )
                    .into()),
                }
            }
            Permission::InstructorSelfOrAdmin(instructor_id) => {
                let instructor =
                    InstructorRepository::new(self.db).find_by_id(*instructor_id).await?;

                match instructor {
                    Some(instructor) if instructor.user_id == account.id => Ok(()),
                    _ => Err(AuthError::AccessDenied(
                        account.id,
                        format!(
                            "instructor profile {} is not owned by the caller",
                            instructor_id
                        ),
                    )
                    .into()),
                }
            }
            Permission::InstructorOrAdmin => {
                if account.role == entity::user::Role::Instructor {
                    Ok(())
                } else {
                    Err(AuthError::AccessDenied(
                        account.id,
                        "instructor role required".to_string(),
                    )
                    .into())
                }
            }
            Permission::CourseOwnerOrAdmin(course_id) => {
                if self.owns_course(account, *course_id).await? {
                    Ok(())
                } else {
                    Err(AuthError::AccessDenied(
                        account.id,
                        format!("course {} is not owned by the caller", course_id),
                    )
                    .into())
                }
            }
            Permission::EnrollmentPartyOrAdmin(enrollment_id) => {
                if self.party_to_enrollment(account, *enrollment_id).await? {
                    Ok(())
                } else {
                    Err(AuthError::AccessDenied(
                        account.id,
                        format!("enrollment {} does not involve the caller", enrollment_id),
                    )
                    .into())
                }
            }
        }
    }

    /// Whether the caller's instructor profile owns the course.
    async fn owns_course(&self, account: &Account, course_id: i32) -> Result<bool, AppError> {
        let Some(instructor) =
            InstructorRepository::new(self.db).find_by_user_id(account.id).await?
        else {
            return Ok(false);
        };

        let Some(course) = CourseRepository::new(self.db).find_by_id(course_id).await? else {
            return Ok(false);
        };

        Ok(course.instructor_id == instructor.id)
    }

    /// Whether the caller is the enrolled student or the owning instructor.
    async fn party_to_enrollment(
        &self,
        account: &Account,
        enrollment_id: i32,
    ) -> Result<bool, AppError> {
        let Some(enrollment) =
            EnrollmentRepository::new(self.db).find_by_id(enrollment_id).await?
        else {
            return Ok(false);
        };

        if let Some(student) = StudentRepository::new(self.db).find_by_user_id(account.id).await? {
            if student.id == enrollment.student_id {
                return Ok(true);
            }
        }

        self.owns_course(account, enrollment.course_id).await
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
///
/// # Returns
/// - `Ok(&str)` - The raw token
/// - `Err(AuthError::MissingToken)` - Header absent, unreadable, or not Bearer
fn extract_bearer(headers: &HeaderMap) -> Result<&str, AuthError> {
    let header = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingToken)?;

    let header = header.to_str().map_err(|_| AuthError::MissingToken)?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::MissingToken)?
        .trim();

    if token.is_empty() {
        return Err(AuthError::MissingToken);
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::model::user::CreateAccountParams;
    use crate::server::{data::user::UserRepository, service::auth::hash_password};
    use axum::http::HeaderValue;
    use entity::user::Role;
    use test_utils::builder::TestBuilder;

    fn keys() -> TokenKeys {
        TokenKeys::new("test-secret", 24)
    }

    async fn seeded_account(
        db: &DatabaseConnection,
        role: Role,
        name: &str,
    ) -> (Account, String) {
        let repo = UserRepository::new(db);
        let account = repo
            .create(CreateAccountParams {
                username: name.to_string(),
                email: format!("{}@example.com", name),
                password_hash: hash_password("pw").unwrap(),
                role,
            })
            .await
            .unwrap();
        let token = keys().issue(&account).unwrap();

        (account, token)
    }

    fn bearer(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
        );
        headers
    }

    #[tokio::test]
    async fn missing_header_is_unauthorized() {
        let test = TestBuilder::new().with_profile_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let keys = keys();

        let headers = HeaderMap::new();
        let guard = AuthGuard::new(db, &keys, &headers);

        let result = guard.require(&[Permission::Admin]).await;
        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::MissingToken))
        ));
    }

    #[tokio::test]
    async fn garbage_token_is_unauthorized() {
        let test = TestBuilder::new().with_profile_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let keys = keys();

        let headers = bearer("not-a-jwt");
        let guard = AuthGuard::new(db, &keys, &headers);

        let result = guard.authenticate().await;
        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::InvalidToken))
        ));
    }

    #[tokio::test]
    async fn student_is_denied_admin_actions() {
        let test = TestBuilder::new().with_profile_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let keys = keys();

        let (_, token) = seeded_account(db, Role::Student, "student1").await;
        let headers = bearer(&token);
        let guard = AuthGuard::new(db, &keys, &headers);

        let result = guard.require(&[Permission::Admin]).await;
        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
        ));
    }

    #[tokio::test]
    async fn admin_passes_every_check() {
        let test = TestBuilder::new().with_profile_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let keys = keys();

        let (admin, token) = seeded_account(db, Role::Admin, "admin1").await;
        let headers = bearer(&token);
        let guard = AuthGuard::new(db, &keys, &headers);

        let account = guard
            .require(&[Permission::Admin, Permission::AccountSelfOrAdmin(9999)])
            .await
            .unwrap();
        assert_eq!(account.id, admin.id);
    }

    #[tokio::test]
    async fn self_check_accepts_own_account_only() {
        let test = TestBuilder::new().with_profile_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let keys = keys();

        let (me, token) = seeded_account(db, Role::Student, "student2").await;
        let (other, _) = seeded_account(db, Role::Student, "student3").await;
        let headers = bearer(&token);
        let guard = AuthGuard::new(db, &keys, &headers);

        assert!(guard
            .require(&[Permission::AccountSelfOrAdmin(me.id)])
            .await
            .is_ok());

        let result = guard.require(&[Permission::AccountSelfOrAdmin(other.id)]).await;
        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
        ));
    }

    #[tokio::test]
    async fn missing_target_yields_forbidden_not_found_leak() {
        let test = TestBuilder::new().with_profile_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let keys = keys();

        let (_, token) = seeded_account(db, Role::Student, "student4").await;
        let headers = bearer(&token);
        let guard = AuthGuard::new(db, &keys, &headers);

        // Student profile 4242 does not exist; a non-admin caller still sees 403.
        let result = guard.require(&[Permission::StudentSelfOrAdmin(4242)]).await;
        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
        ));
    }

    #[tokio::test]
    async fn deleted_account_token_is_rejected() {
        let test = TestBuilder::new().with_profile_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let keys = keys();

        let (account, token) = seeded_account(db, Role::Student, "student5").await;
        UserRepository::new(db).delete(account.id).await.unwrap();

        let headers = bearer(&token);
        let guard = AuthGuard::new(db, &keys, &headers);

        let result = guard.authenticate().await;
        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::AccountNotFound))
        ));
    }
}
