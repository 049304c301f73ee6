//! Domain models and operation parameter types.
//!
//! Domain models are built from database entities via `from_entity` and converted
//! into API DTOs via `into_dto`. Parameter types carry already-validated input
//! from controllers through services into repositories.

pub mod server;
pub mod upload;
