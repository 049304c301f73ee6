use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A server record as exposed by the API.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ServerDto {
    pub id: i32,
    pub name: String,
    pub ip: String,
    /// Stored filename of the uploaded flag image, empty when none
    pub flag: String,
    /// Stored filename of the uploaded configuration file, empty when none
    pub file: String,
}

/// One page of servers plus paging metadata.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedServersDto {
    pub results: Vec<ServerDto>,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
    pub total_results: u64,
}

/// Multipart form accepted when creating a server.
///
/// Only used to describe the request body in the OpenAPI document; the body is
/// parsed by the upload middleware.
#[allow(dead_code)]
#[derive(ToSchema)]
pub struct CreateServerForm {
    pub name: String,
    /// IPv4 or IPv6 address, must be unique
    pub ip: String,
    /// Image (jpeg, png or gif)
    #[schema(format = Binary)]
    pub flag: Option<String>,
    /// Configuration file
    #[schema(format = Binary)]
    pub file: Option<String>,
}

/// Multipart form accepted when updating a server. At least one field is required.
#[allow(dead_code)]
#[derive(ToSchema)]
pub struct UpdateServerForm {
    pub name: Option<String>,
    pub ip: Option<String>,
    #[schema(format = Binary)]
    pub flag: Option<String>,
    #[schema(format = Binary)]
    pub file: Option<String>,
}
