use std::collections::HashMap;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        server::{CreateServerForm, PaginatedServersDto, ServerDto, UpdateServerForm},
    },
    server::{
        error::AppError,
        middleware::upload::ServerPayload,
        model::server::{CreateServerParams, UpdateServerParams},
        service::server::ServerService,
        state::AppState,
        validation,
    },
};

/// Tag for grouping server endpoints in OpenAPI documentation
pub static SERVER_TAG: &str = "server";

/// Create a new server.
///
/// Accepts the server's name and IP plus an optional flag image and configuration
/// file. Uploaded files are stored before the handler runs and removed again if the
/// request fails.
///
/// # Access Control
/// - `manageServers` - Enforced by the router's route layer
///
/// # Returns
/// - `201 Created` - The created server
/// - `400 Bad Request` - Invalid fields or uploads
/// - `401 Unauthorized` - Missing or invalid access token
/// - `403 Forbidden` - Role lacks the manageServers permission
/// - `409 Conflict` - Another server already uses the IP
#[utoipa::path(
    post,
    path = "/servers",
    tag = SERVER_TAG,
    request_body(content = CreateServerForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Successfully created server", body = ServerDto),
        (status = 400, description = "Invalid server data", body = ErrorDto),
        (status = 401, description = "Please authenticate", body = ErrorDto),
        (status = 403, description = "Forbidden", body = ErrorDto),
        (status = 409, description = "IP already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearerAuth" = [])),
)]
pub async fn create_server(
    State(state): State<AppState>,
    payload: ServerPayload,
) -> Result<impl IntoResponse, AppError> {
    let ServerPayload { body, uploads } = payload;
    let store = &state.uploads;

    let body = store
        .discard_on_err(&uploads, validation::server::create_server(&body, &uploads))
        .await?;

    let params = CreateServerParams::from_body(body, &uploads);

    let service = ServerService::new(&state.db);
    let server = store.discard_on_err(&uploads, service.create(params).await).await?;

    Ok((StatusCode::CREATED, Json(server.into_dto())))
}

/// Get a page of servers.
///
/// Filters by exact `name`, `ip`, `flag` or `file`, sorts by `sortBy` criteria
/// (`field[:asc|desc]`, comma-separated) and pages with `limit` and `page`.
///
/// # Access Control
/// - `manageServers` - Enforced by the router's route layer
///
/// # Returns
/// - `200 OK` - Page of servers with paging metadata
/// - `400 Bad Request` - Unknown or invalid query parameters
#[utoipa::path(
    get,
    path = "/servers",
    tag = SERVER_TAG,
    params(
        ("name" = Option<String>, Query, description = "Server name"),
        ("ip" = Option<String>, Query, description = "Server IP address"),
        ("flag" = Option<String>, Query, description = "Stored flag filename"),
        ("file" = Option<String>, Query, description = "Stored configuration filename"),
        ("sortBy" = Option<String>, Query, description = "Sort criteria, e.g. name:desc,createdAt"),
        ("limit" = Option<u64>, Query, description = "Maximum number of servers per page (default 10)"),
        ("page" = Option<u64>, Query, description = "Page number, starting at 1 (default 1)")
    ),
    responses(
        (status = 200, description = "Page of servers", body = PaginatedServersDto),
        (status = 400, description = "Invalid query", body = ErrorDto),
        (status = 401, description = "Please authenticate", body = ErrorDto),
        (status = 403, description = "Forbidden", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearerAuth" = [])),
)]
pub async fn get_servers(
    State(state): State<AppState>,
    query: Result<Query<HashMap<String, String>>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;
    let (filter, options) = validation::server::get_servers(&query)?;

    let service = ServerService::new(&state.db);
    let servers = service.query(filter, options).await?;

    Ok((StatusCode::OK, Json(servers.into_dto())))
}

/// Get a server by ID.
///
/// # Access Control
/// - `manageServers` - Enforced by the router's route layer
///
/// # Returns
/// - `200 OK` - The server
/// - `400 Bad Request` - Malformed server ID
/// - `404 Not Found` - No server has this ID
#[utoipa::path(
    get,
    path = "/servers/{serverId}",
    tag = SERVER_TAG,
    params(
        ("serverId" = String, Path, description = "Server ID")
    ),
    responses(
        (status = 200, description = "The server", body = ServerDto),
        (status = 400, description = "Invalid server ID", body = ErrorDto),
        (status = 401, description = "Please authenticate", body = ErrorDto),
        (status = 403, description = "Forbidden", body = ErrorDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearerAuth" = [])),
)]
pub async fn get_server(
    State(state): State<AppState>,
    Path(server_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = validation::server::server_id(&server_id)?;

    let service = ServerService::new(&state.db);

    match service.get_by_id(id).await? {
        Some(server) => Ok((StatusCode::OK, Json(server.into_dto()))),
        None => Err(AppError::NotFound("Server not found".to_string())),
    }
}

/// Update a server.
///
/// Assigns the given fields. A re-uploaded `flag` or `file` replaces the stored
/// reference, an explicit `null` clears it and omitting it keeps it. Files dropped by
/// the update are removed from disk.
///
/// # Access Control
/// - `manageServers` - Enforced by the router's route layer
///
/// # Returns
/// - `200 OK` - The updated server
/// - `400 Bad Request` - No fields given or invalid fields
/// - `404 Not Found` - No server has this ID
/// - `409 Conflict` - Another server already uses the IP
#[utoipa::path(
    patch,
    path = "/servers/{serverId}",
    tag = SERVER_TAG,
    params(
        ("serverId" = String, Path, description = "Server ID")
    ),
    request_body(content = UpdateServerForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Successfully updated server", body = ServerDto),
        (status = 400, description = "Invalid server data", body = ErrorDto),
        (status = 401, description = "Please authenticate", body = ErrorDto),
        (status = 403, description = "Forbidden", body = ErrorDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 409, description = "IP already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearerAuth" = [])),
)]
pub async fn update_server(
    State(state): State<AppState>,
    Path(server_id): Path<String>,
    payload: ServerPayload,
) -> Result<impl IntoResponse, AppError> {
    let ServerPayload { body, uploads } = payload;
    let store = &state.uploads;

    let (id, body) = store
        .discard_on_err(
            &uploads,
            validation::server::update_server(&server_id, &body, &uploads),
        )
        .await?;

    let params = UpdateServerParams::from_body(body, &uploads);

    let service = ServerService::new(&state.db);
    let update = store
        .discard_on_err(&uploads, service.update_by_id(id, params).await)
        .await?;

    for filename in &update.replaced_files {
        store.remove(filename).await;
    }

    Ok((StatusCode::OK, Json(update.server.into_dto())))
}

/// Delete a server.
///
/// Removes the record and, best effort, its stored flag and configuration files.
///
/// # Access Control
/// - `manageServers` - Enforced by the router's route layer
///
/// # Returns
/// - `204 No Content` - Server deleted
/// - `400 Bad Request` - Malformed server ID
/// - `404 Not Found` - No server has this ID
#[utoipa::path(
    delete,
    path = "/servers/{serverId}",
    tag = SERVER_TAG,
    params(
        ("serverId" = String, Path, description = "Server ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted server"),
        (status = 400, description = "Invalid server ID", body = ErrorDto),
        (status = 401, description = "Please authenticate", body = ErrorDto),
        (status = 403, description = "Forbidden", body = ErrorDto),
        (status = 404, description = "Server not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearerAuth" = [])),
)]
pub async fn delete_server(
    State(state): State<AppState>,
    Path(server_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = validation::server::server_id(&server_id)?;

    let service = ServerService::new(&state.db);
    let server = service.delete_by_id(id).await?;

    for filename in [&server.flag, &server.file] {
        state.uploads.remove(filename).await;
    }

    Ok(StatusCode::NO_CONTENT)
}
