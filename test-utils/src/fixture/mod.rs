//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. They build
//! in-memory request data for driving HTTP handlers.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture::multipart::MultipartBody;
//!
//! let body = MultipartBody::new()
//!     .text("name", "edge-1")
//!     .text("ip", "10.0.0.1")
//!     .file("flag", "flag.png", "image/png", b"\x89PNG");
//!
//! let content_type = body.content_type();
//! let bytes = body.into_bytes();
//! ```

pub mod multipart;
