use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use std::path::Path;
use tempfile::TempDir;

use crate::error::TestError;

/// Test context containing database connection, upload directory, and test environment setup.
///
/// Provides an in-memory SQLite database connection and a temporary directory for uploaded
/// files. Both are created lazily on first access and persist for the lifetime of the test
/// context; the upload directory is deleted when the context is dropped.
pub struct TestContext {
    /// Optional database connection to in-memory SQLite instance.
    ///
    /// Initialized lazily when `database()` is first called.
    pub db: Option<DatabaseConnection>,

    /// Optional temporary directory receiving uploaded files.
    ///
    /// Initialized lazily when `upload_dir()` is first called.
    pub uploads: Option<TempDir>,
}

impl TestContext {
    /// Creates a new empty test context.
    ///
    /// # Returns
    /// - New `TestContext` instance with no database connection
    pub fn new() -> Self {
        Self {
            db: None,
            uploads: None,
        }
    }

    /// Gets or creates the in-memory SQLite database connection.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::Database)` - Failed to connect to in-memory SQLite database
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = Database::connect("sqlite::memory:").await?;

                let db_ref = self.db.insert(db);

                Ok(&*db_ref) // Re-borrow as immutable
            }
        }
    }

    /// Creates database tables from the provided CREATE TABLE statements.
    ///
    /// Typically called internally by `TestBuilder::build()` rather than directly.
    ///
    /// # Arguments
    /// - `stmts` - Vector of CREATE TABLE statements to execute
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::Database)` - Failed to create one or more tables
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Gets or creates the temporary upload directory.
    ///
    /// # Returns
    /// - `Ok(&Path)` - Path of the upload directory
    /// - `Err(TestError::Io)` - Failed to create the temporary directory
    pub fn upload_dir(&mut self) -> Result<&Path, TestError> {
        match self.uploads {
            Some(ref dir) => Ok(dir.path()),
            None => {
                let dir = self.uploads.insert(tempfile::tempdir()?);

                Ok(dir.path())
            }
        }
    }

    /// Gets both the database connection and upload directory.
    ///
    /// Initializes both if they don't exist, then returns immutable references to both.
    /// This avoids borrow checker issues when calling `database()` and `upload_dir()`
    /// separately.
    ///
    /// # Returns
    /// - `Ok((&DatabaseConnection, &Path))` - References to the database and upload directory
    /// - `Err(TestError)` - Failed to initialize either of them
    pub async fn db_and_uploads(&mut self) -> Result<(&DatabaseConnection, &Path), TestError> {
        self.database().await?;
        self.upload_dir()?;

        Ok((
            self.db.as_ref().unwrap(),
            self.uploads.as_ref().unwrap().path(),
        ))
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
