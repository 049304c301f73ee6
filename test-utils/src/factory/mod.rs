//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities and credentials with
//! sensible defaults, reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let server = factory::server::create_server(&db).await?;
//!
//!     // Sign an admin token
//!     let token = factory::token::admin_token()?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `server` - Create server entities
//! - `token` - Sign access tokens for a role
//! - `helpers` - Unique ID generation and bulk creation

pub mod helpers;
pub mod server;
pub mod token;

// Re-export commonly used factory functions for concise usage
pub use helpers::create_servers;
pub use server::create_server;
pub use token::{admin_token, user_token};
