//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum serves as the top-level
//! error type that wraps domain-specific errors and implements `IntoResponse`, so every
//! failure leaves the API as a JSON `{code, message}` body.

pub mod auth;
pub mod config;
pub mod validation;

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, validation::ValidationError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. Domain-specific errors like `AuthError` handle their own response
/// mapping, while generic variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for 401/403 mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Request failed schema validation.
    ///
    /// Results in 400 Bad Request listing every offending field.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// Database operation error from SeaORM.
    ///
    /// Unique constraint violations result in 409 Conflict, everything else in
    /// 500 Internal Server Error with details logged server-side.
    #[error(transparent)]
    DbErr(#[from] DbErr),

    /// Filesystem error while storing or removing uploads, or binding the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Malformed multipart body or an upload exceeding the body limit.
    #[error(transparent)]
    MultipartErr(#[from] MultipartError),

    /// Request declared as multipart could not be read as such.
    #[error(transparent)]
    MultipartRejection(#[from] MultipartRejection),

    /// Request declared as JSON could not be parsed.
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),

    /// Query string could not be decoded.
    #[error(transparent)]
    QueryRejection(#[from] QueryRejection),

    /// Request body has a content type the API does not accept.
    ///
    /// Results in 415 Unsupported Media Type.
    #[error("{0}")]
    UnsupportedMediaType(String),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Builds the JSON error body for a status code and message.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            code: status.as_u16(),
            message: message.into(),
        }),
    )
        .into_response()
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For validation failures, malformed bodies and `BadRequest`
/// - 401 / 403 - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For database unique constraint violations
/// - 413 Payload Too Large - For uploads exceeding the body limit
/// - 415 Unsupported Media Type - For `UnsupportedMediaType`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::ValidationErr(err) => error_response(StatusCode::BAD_REQUEST, err.to_string()),
            Self::DbErr(err) if is_unique_violation(&err) => {
                tracing::debug!("Unique constraint violation: {}", err);
                error_response(StatusCode::CONFLICT, "Ip already taken")
            }
            Self::MultipartErr(err) => error_response(err.status(), err.body_text()),
            Self::MultipartRejection(err) => error_response(err.status(), err.body_text()),
            Self::JsonRejection(err) => error_response(err.status(), err.body_text()),
            Self::QueryRejection(err) => error_response(err.status(), err.body_text()),
            Self::UnsupportedMediaType(msg) => {
                error_response(StatusCode::UNSUPPORTED_MEDIA_TYPE, msg)
            }
            Self::NotFound(msg) => error_response(StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => error_response(StatusCode::BAD_REQUEST, msg),
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
