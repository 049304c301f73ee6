//! Request middleware.
//!
//! - `auth` - Bearer token verification and permission checks
//! - `upload` - Body extractor turning multipart or JSON bodies into fields plus stored files

pub mod auth;
pub mod upload;
