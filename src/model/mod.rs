//! Data transfer objects shared by the HTTP API.
//!
//! These types define the JSON shapes sent to and received from clients, along with
//! the OpenAPI schemas generated for them. Domain models in `server::model` convert
//! into these via `into_dto`.

pub mod api;
pub mod server;
