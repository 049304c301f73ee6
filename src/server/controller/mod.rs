//! HTTP request handlers.
//!
//! Controllers validate requests, convert them into parameter models, call services
//! and map the resulting domain models into DTOs. Authorization is applied by the
//! router's route layer before any handler runs.

pub mod health;
pub mod server;
