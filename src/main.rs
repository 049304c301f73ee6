mod model;
mod server;

use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let uploads = startup::prepare_upload_store(&config).await?;
    let jwt_key = startup::jwt_decoding_key(&config);

    let app = router::router(AppState::new(db, jwt_key, uploads), config.max_upload_bytes);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Listening on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}
