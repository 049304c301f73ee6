use jsonwebtoken::DecodingKey;

use crate::server::{config::Config, error::AppError, util::storage::UploadStore};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the upload directory if needed and returns a store rooted at it.
pub async fn prepare_upload_store(config: &Config) -> Result<UploadStore, AppError> {
    let store = UploadStore::new(&config.upload_dir);
    store.ensure_dir().await?;

    tracing::info!("Storing uploads in {}", config.upload_dir.display());

    Ok(store)
}

pub fn jwt_decoding_key(config: &Config) -> DecodingKey {
    DecodingKey::from_secret(config.jwt_secret.as_bytes())
}

/// Resolves when Ctrl-C is received, letting in-flight requests finish.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }

    tracing::info!("Shutdown signal received");
}
