//! Request schema validation.
//!
//! Each schema function checks one request's body, query or path parameters and either
//! returns typed, validated input or a `ValidationError` listing every violation. Messages
//! follow the `"field" must ...` style and nested keys are addressed with dots, e.g.
//! `"flag.headers.content-type"`. Validation runs in controllers before any service call.

pub mod custom;
pub mod server;
