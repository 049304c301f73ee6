//! Serverboard Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the serverboard
//! application. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, temporary upload directories and factories for test data.
//!
//! # Overview
//!
//! The test utilities consist of these components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and upload directory
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Inserts records and mints signed access tokens
//! - **fixture**: Builds in-memory request data such as multipart bodies
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Server;
//!
//! #[tokio::test]
//! async fn test_server_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Server)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;

/// Secret used to sign access tokens in tests.
pub const TEST_JWT_SECRET: &str = "serverboard-test-secret";
