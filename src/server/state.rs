//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources needed by
//! the application. The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Decoding key for verifying bearer tokens
//! - Upload store for files received through multipart requests

use jsonwebtoken::DecodingKey;
use sea_orm::DatabaseConnection;

use crate::server::util::storage::UploadStore;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `DecodingKey` holds the raw secret bytes
/// - `UploadStore` only holds the upload directory path
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HS256 key used by the authorization middleware to verify access tokens.
    pub jwt_key: DecodingKey,

    /// Directory where uploaded flag and configuration files are stored.
    pub uploads: UploadStore,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `jwt_key` - Key used to verify bearer tokens
    /// - `uploads` - Store for uploaded files
    pub fn new(db: DatabaseConnection, jwt_key: DecodingKey, uploads: UploadStore) -> Self {
        Self {
            db,
            jwt_key,
            uploads,
        }
    }
}
