//! Database repository layer.
//!
//! Repositories handle the database operations (CRUD) for each domain. They use SeaORM
//! entity models internally and return domain models to keep the data layer separate
//! from the business logic layer.

pub mod server;
