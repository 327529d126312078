use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use entity::user::Role;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::auth::{AuthGuard, Permission},
        model::user::parse_role,
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List all accounts.
///
/// # Access Control
/// - `Admin` - Only admins can list accounts
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
///
/// # Returns
/// - `200 OK` - All accounts
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All accounts", body = Vec<UserDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let accounts = UserService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            accounts
                .into_iter()
                .map(|account| account.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Create an account with an explicit role.
///
/// Unlike signup, this endpoint accepts any role and is reserved for admins.
///
/// # Access Control
/// - `Admin` - Only admins can create accounts directly
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Account data (username, email, password, role)
///
/// # Returns
/// - `201 Created` - The created account
/// - `400 Bad Request` - Missing fields or unknown role
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `409 Conflict` - Username or email already taken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Missing fields or unknown role", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 409, description = "Username or email already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let role = parse_role(&payload.role)?;

    let account = UserService::new(&state.db)
        .create(&payload.username, &payload.email, &payload.password, role)
        .await?;

    Ok((StatusCode::CREATED, Json(account.into_dto())))
}

/// Get an account by id.
///
/// # Access Control
/// - `Admin` - Admins can fetch any account
/// - Self - An account can fetch itself
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `user_id` - Id of the account to fetch
///
/// # Returns
/// - `200 OK` - The account
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is neither the account nor an admin
/// - `404 Not Found` - No account with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "Account id")
    ),
    responses(
        (status = 200, description = "The account", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is neither the account nor an admin", body = ErrorDto),
        (status = 404, description = "No account with that id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::AccountSelfOrAdmin(user_id)])
        .await?;

    let account = UserService::new(&state.db)
        .get_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok((StatusCode::OK, Json(account.into_dto())))
}

/// Patch an account.
///
/// Only whitelisted fields (username, email, password, role) can change, and a
/// role change is limited to admin callers; everything else on the account is
/// immutable through this endpoint.
///
/// # Access Control
/// - `Admin` - Admins can patch any account, including its role
/// - Self - An account can patch its own username, email and password
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `user_id` - Id of the account to patch
/// - `payload` - Fields to change; absent fields stay untouched
///
/// # Returns
/// - `200 OK` - The updated account
/// - `400 Bad Request` - Unknown role or empty password
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller not allowed, or non-admin tried to change a role
/// - `404 Not Found` - No account with that id
/// - `409 Conflict` - New username or email already taken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "Account id")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "The updated account", body = UserDto),
        (status = 400, description = "Unknown role or empty password", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller not allowed to patch this account", body = ErrorDto),
        (status = 404, description = "No account with that id", body = ErrorDto),
        (status = 409, description = "New username or email already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::AccountSelfOrAdmin(user_id)])
        .await?;

    // Role changes are a privileged operation, not part of self-service patch.
    let role = match payload.role {
        Some(_) if caller.role != Role::Admin => {
            return Err(AuthError::AccessDenied(
                caller.id,
                "role changes require admin".to_string(),
            )
            .into());
        }
        Some(ref role) => Some(parse_role(role)?),
        None => None,
    };

    let account = UserService::new(&state.db)
        .update(user_id, payload.username, payload.email, payload.password, role)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok((StatusCode::OK, Json(account.into_dto())))
}

/// Delete an account.
///
/// Removes the account, its linked profile, and everything that profile owns
/// (courses and enrollments for instructors, enrollments for students).
///
/// # Access Control
/// - `Admin` - Only admins can delete accounts
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `user_id` - Id of the account to delete
///
/// # Returns
/// - `200 OK` - Deletion acknowledgment
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - No account with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "Account id")
    ),
    responses(
        (status = 200, description = "Deletion acknowledgment", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "No account with that id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let deleted = UserService::new(&state.db).delete(user_id).await?;

    if deleted {
        Ok((
            StatusCode::OK,
            Json(MessageDto {
                message: "User deleted successfully".to_string(),
            }),
        ))
    } else {
        Err(AppError::NotFound("User not found".to_string()))
    }
}
