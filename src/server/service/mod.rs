//! Business logic layer.
//!
//! Services orchestrate repository calls for controllers, turning missing records into
//! `AppError::NotFound` and assembling paged results.

pub mod server;
