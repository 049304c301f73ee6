use axum::{extract::DefaultBodyLimit, middleware, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        health::{__path_health, health},
        server::{
            __path_create_server, __path_delete_server, __path_get_server, __path_get_servers,
            __path_update_server, create_server, delete_server, get_server, get_servers,
            update_server,
        },
    },
    middleware::auth::require_manage_servers,
    state::AppState,
};

/// Path of the Swagger UI
pub const DOCS_PATH: &str = "/docs";
/// Path of the generated OpenAPI document
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Serverboard API",
        description = "Manage server records with their flag image and configuration file"
    ),
    tags(
        (name = "server", description = "Server management and retrieval"),
        (name = "health", description = "Service health")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearerAuth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Builds the application router.
///
/// Every `/servers` route requires the `manageServers` permission, checked by a route
/// layer before the request body is read. `/health` and the API documentation are public.
pub fn router(state: AppState, max_upload_bytes: usize) -> Router {
    let servers = OpenApiRouter::new()
        .routes(routes!(create_server, get_servers))
        .routes(routes!(get_server, update_server, delete_server))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_manage_servers,
        ));

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(servers)
        .routes(routes!(health))
        .split_for_parts();

    router
        .merge(SwaggerUi::new(DOCS_PATH).url(OPENAPI_PATH, api))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
