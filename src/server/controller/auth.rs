use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::{AuthResponseDto, LoginDto, SignupDto},
    },
    server::{error::AppError, service::auth::AuthService, state::AppState},
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new student account.
///
/// Creates an account with role `student` from the supplied username, email and
/// password, and returns the account together with a bearer token. Elevated
/// accounts (instructor, admin) are created by admins through the user and
/// instructor endpoints instead.
///
/// # Access Control
/// - Public - No authentication required
///
/// # Arguments
/// - `state` - Application state containing the database connection and token keys
/// - `payload` - Signup data (username, email, password)
///
/// # Returns
/// - `201 Created` - Account created; body carries the account and a token
/// - `400 Bad Request` - Missing or malformed fields
/// - `409 Conflict` - Username or email already taken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/auth/signup",
    tag = AUTH_TAG,
    request_body = SignupDto,
    responses(
        (status = 201, description = "Account created", body = AuthResponseDto),
        (status = 400, description = "Missing or malformed fields", body = ErrorDto),
        (status = 409, description = "Username or email already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens);

    let (account, token) = service
        .signup(&payload.username, &payload.email, &payload.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponseDto {
            user: account.into_dto(),
            token,
        }),
    ))
}

/// Log in with email and password.
///
/// Verifies the credentials and returns the account with a fresh bearer token.
/// Unknown email and wrong password are indistinguishable in the response.
///
/// # Access Control
/// - Public - No authentication required
///
/// # Arguments
/// - `state` - Application state containing the database connection and token keys
/// - `payload` - Login data (email, password)
///
/// # Returns
/// - `200 OK` - Credentials accepted; body carries the account and a token
/// - `400 Bad Request` - Missing fields
/// - `401 Unauthorized` - Invalid email or password
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Credentials accepted", body = AuthResponseDto),
        (status = 400, description = "Missing fields", body = ErrorDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens);

    let (account, token) = service.login(&payload.email, &payload.password).await?;

    Ok((
        StatusCode::OK,
        Json(AuthResponseDto {
            user: account.into_dto(),
            token,
        }),
    ))
}

/// Log out.
///
/// Bearer tokens are stateless, so there is nothing to revoke server-side;
/// this endpoint acknowledges the logout and clients discard their token.
///
/// # Access Control
/// - Public - No authentication required
///
/// # Returns
/// - `200 OK` - Acknowledgment message
#[utoipa::path(
    post,
    path = "/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logout acknowledged", body = MessageDto)
    ),
)]
pub async fn logout() -> Result<impl IntoResponse, AppError> {
    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Logout successful".to_string(),
        }),
    ))
}
