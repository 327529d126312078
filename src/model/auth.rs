use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserDto;

/// Payload for `POST /auth/signup`. Signup always creates a student account.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct SignupDto {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Payload for `POST /auth/login`.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Response for successful signup and login: the account plus a bearer token.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct AuthResponseDto {
    pub user: UserDto,
    pub token: String,
}
