use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no usable `Authorization: Bearer <token>` header.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Authorization header is missing or malformed")]
    MissingToken,

    /// Bearer token failed signature verification or has expired.
    ///
    /// Any decode failure (malformed payload, wrong signature, expired `exp`
    /// claim) collapses into this variant so clients can't probe which part
    /// failed. Results in a 401 Unauthorized response.
    #[error("Token is invalid or expired")]
    InvalidToken,

    /// Login attempt with an unknown email or a wrong password.
    ///
    /// Both cases share one variant and one message so the endpoint cannot be
    /// used to probe which emails are registered. Results in a 401
    /// Unauthorized response.
    #[error("Invalid email or password")]
    BadCredentials,

    /// Token verified but the account it references no longer exists.
    ///
    /// Happens when an account is deleted while one of its tokens is still in
    /// circulation. Results in a 401 Unauthorized response.
    #[error("Account for token no longer exists")]
    AccountNotFound,

    /// Authenticated caller lacks the role or ownership the action requires.
    ///
    /// The detail message is logged server-side; the client only sees a
    /// generic refusal so the check never reveals whether the target exists.
    /// Results in a 403 Forbidden response.
    ///
    /// # Fields
    /// - Id of the account that attempted the action
    /// - Description of the refused action for diagnostics
    #[error("Access denied for account {0}: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication failures to 401 Unauthorized (no token, bad token,
/// vanished account) and authorization failures to 403 Forbidden. The 403
/// body is always the same generic message; the specific reason is logged
/// at debug level for diagnostics.
///
/// # Returns
/// - 401 Unauthorized - For `MissingToken`, `InvalidToken`, `AccountNotFound`
/// - 403 Forbidden - For `AccessDenied`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken | Self::InvalidToken | Self::BadCredentials | Self::AccountNotFound => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(account_id, reason) => {
                tracing::debug!("Access denied for account {}: {}", account_id, reason);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "Access denied".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
