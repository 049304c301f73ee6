use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use chrono::Duration;
use test_utils::factory::token::{self, TokenFactory};

use super::test_key;
use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission, Role},
};

mod role;

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}
