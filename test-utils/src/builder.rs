use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_server_tables()
///     .with_upload_dir()
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Vector of CREATE TABLE statements to execute during database setup.
    ///
    /// Each statement is generated from an entity model using SeaORM's schema builder.
    /// Statements are executed in the order they were added during `build()`.
    tables: Vec<TableCreateStatement>,

    /// Whether to create a temporary upload directory for the context.
    upload_dir: bool,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            upload_dir: false,
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. The table will be created when `build()` is called.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds all tables required for server operations.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_server_tables(self) -> Self {
        self.with_table(Server)
    }

    /// Requests a temporary upload directory, removed when the context is dropped.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_upload_dir(mut self) -> Self {
        self.upload_dir = true;
        self
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`, then creates the upload directory
    /// if one was requested.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    /// - `Err(TestError::Io)` - Failed to create the temporary upload directory
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        if self.upload_dir {
            setup.upload_dir()?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
