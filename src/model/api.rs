use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error response body returned by every failing endpoint.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Acknowledgment body for operations without a resource payload
/// (logout, deletes).
#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}
