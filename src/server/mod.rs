//! Server-side API backend and business logic.
//!
//! This module contains the complete backend for the server management API: HTTP
//! handlers, request validation, business logic, data access and file upload storage.
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Validation Layer** (`validation/`) - Schema checks of bodies, queries and path parameters
//! - **Service Layer** (`service/`) - Business logic between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token authorization and multipart upload parsing
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, JWT key, upload store)
//! - **Startup** (`startup`) - Database connection, migrations and upload directory setup
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Utilities** (`util/`) - Environment parsing and upload file storage
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Middleware** verifies the bearer token and the `manageServers` permission
//! 3. **Upload middleware** parses the body and stores uploaded files
//! 4. **Controller** validates the request, converts it to params and calls the service
//! 5. **Service** executes business logic and orchestrates data operations
//! 6. **Data** queries the database and converts entities to domain models
//! 7. **Controller** converts the domain model to a DTO and returns the HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
pub mod validation;
