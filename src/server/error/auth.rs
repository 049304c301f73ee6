use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer` header on the request.
    #[error("Missing bearer token")]
    MissingToken,

    /// Token signature, expiry or claims failed verification.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    /// Token verified but is not an access token.
    #[error("Expected an access token but got a {0:?} token")]
    WrongTokenType(String),

    /// Authenticated subject lacks a required permission.
    ///
    /// # Fields
    /// - Subject of the token
    /// - Description of the denied operation
    #[error("Access denied for {0}: {1}")]
    AccessDenied(String, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` / `WrongTokenType` → 401 Unauthorized with "Please authenticate"
/// - `AccessDenied` → 403 Forbidden with "Forbidden"
///
/// Details are logged at debug level while the client only sees the generic message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingToken | Self::InvalidToken(_) | Self::WrongTokenType(_) => {
                error_response(StatusCode::UNAUTHORIZED, "Please authenticate")
            }
            Self::AccessDenied(_, _) => error_response(StatusCode::FORBIDDEN, "Forbidden"),
        }
    }
}
