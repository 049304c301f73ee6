//! Server factory for creating test server entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test servers with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::server::ServerFactory;
///
/// let server = ServerFactory::new(&db)
///     .name("edge-1")
///     .ip("10.0.0.1")
///     .build()
///     .await?;
/// ```
pub struct ServerFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    ip: String,
    flag: String,
    file: String,
}

impl<'a> ServerFactory<'a> {
    /// Creates a new ServerFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Server {id}"`
    /// - ip: `"10.{a}.{b}.{c}"` derived from the auto-incremented id
    /// - flag / file: empty
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `ServerFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Server {}", id),
            ip: format!("10.{}.{}.{}", (id >> 16) & 0xff, (id >> 8) & 0xff, id & 0xff),
            flag: String::new(),
            file: String::new(),
        }
    }

    /// Sets the server name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the server IP address.
    pub fn ip(mut self, ip: impl Into<String>) -> Self {
        self.ip = ip.into();
        self
    }

    /// Sets the stored flag image filename.
    pub fn flag(mut self, flag: impl Into<String>) -> Self {
        self.flag = flag.into();
        self
    }

    /// Sets the stored configuration filename.
    pub fn file(mut self, file: impl Into<String>) -> Self {
        self.file = file.into();
        self
    }

    /// Builds and inserts the server entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::server::Model)` - Created server entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::server::Model, DbErr> {
        let now = Utc::now();
        entity::server::ActiveModel {
            name: ActiveValue::Set(self.name),
            ip: ActiveValue::Set(self.ip),
            flag: ActiveValue::Set(self.flag),
            file: ActiveValue::Set(self.file),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a server with default values.
///
/// Shorthand for `ServerFactory::new(db).build().await`.
pub async fn create_server(db: &DatabaseConnection) -> Result<entity::server::Model, DbErr> {
    ServerFactory::new(db).build().await
}
