use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    model::api::{ErrorDto, HealthDto},
    server::{error::error_response, state::AppState},
};

/// Tag for grouping health endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Report whether the service can reach its database.
///
/// # Returns
/// - `200 OK` - Database answered a ping
/// - `503 Service Unavailable` - Database is unreachable
#[utoipa::path(
    get,
    path = "/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service is healthy", body = HealthDto),
        (status = 503, description = "Database is unreachable", body = ErrorDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> Response {
    if let Err(e) = state.db.ping().await {
        tracing::error!("Health check failed: {}", e);
        return error_response(StatusCode::SERVICE_UNAVAILABLE, "Database unavailable");
    }

    (
        StatusCode::OK,
        Json(HealthDto {
            status: "ok".to_string(),
        }),
    )
        .into_response()
}
