use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned by every failing endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ErrorDto {
    /// HTTP status code of the response
    pub code: u16,
    pub message: String,
}

/// Body returned by the health check endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct HealthDto {
    pub status: String,
}
