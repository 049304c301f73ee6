//! SeaORM entities for the serverboard database.

pub mod prelude;

pub mod server;
