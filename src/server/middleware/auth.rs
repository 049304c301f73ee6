//! Bearer token authorization.
//!
//! Access tokens are HS256 JWTs carrying the subject, its role and the token type. The
//! role grants a fixed set of permissions looked up in a compiled-in table; routes declare
//! the permissions they need and `AuthGuard::require` checks all of them.

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::Deserialize;

use crate::server::{
    error::{auth::AuthError, AppError},
    state::AppState,
};

/// Token type accepted for API requests
pub const ACCESS_TOKEN_TYPE: &str = "access";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    GetUsers,
    ManageUsers,
    ManageServers,
}

impl Permission {
    pub fn name(self) -> &'static str {
        match self {
            Self::GetUsers => "getUsers",
            Self::ManageUsers => "manageUsers",
            Self::ManageServers => "manageServers",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn name(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "user" => Some(Self::User),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    /// Permissions granted to the role
    pub fn rights(self) -> &'static [Permission] {
        match self {
            Self::User => &[],
            Self::Admin => &[
                Permission::GetUsers,
                Permission::ManageUsers,
                Permission::ManageServers,
            ],
        }
    }
}

/// Claims of an access token
#[derive(Debug, Clone, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: String,
    #[serde(rename = "type")]
    pub token_type: String,
}

/// Caller identity established by `AuthGuard`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub subject: String,
    pub role: Role,
}

pub struct AuthGuard<'a> {
    key: &'a DecodingKey,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(key: &'a DecodingKey, headers: &'a HeaderMap) -> Self {
        Self { key, headers }
    }

    /// Verifies the bearer token and checks the caller holds every permission.
    ///
    /// # Returns
    /// - `Ok(AuthUser)` - Token is valid and the role grants all `permissions`
    /// - `Err(AuthError::MissingToken)` - No bearer token on the request
    /// - `Err(AuthError::InvalidToken)` - Bad signature, expired or malformed token
    /// - `Err(AuthError::WrongTokenType)` - Token is not an access token
    /// - `Err(AuthError::AccessDenied)` - Unknown role or a missing permission
    pub fn require(&self, permissions: &[Permission]) -> Result<AuthUser, AppError> {
        let token = bearer_token(self.headers).ok_or(AuthError::MissingToken)?;

        let claims = jsonwebtoken::decode::<Claims>(
            token,
            self.key,
            &Validation::new(Algorithm::HS256),
        )
        .map_err(AuthError::from)?
        .claims;

        if claims.token_type != ACCESS_TOKEN_TYPE {
            return Err(AuthError::WrongTokenType(claims.token_type).into());
        }

        let Some(role) = Role::from_name(&claims.role) else {
            return Err(AuthError::AccessDenied(
                claims.sub,
                format!("Unknown role {:?}", claims.role),
            )
            .into());
        };

        for permission in permissions {
            if !role.rights().contains(permission) {
                return Err(AuthError::AccessDenied(
                    claims.sub,
                    format!("Role lacks the {} permission", permission.name()),
                )
                .into());
            }
        }

        Ok(AuthUser {
            subject: claims.sub,
            role,
        })
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Route layer guarding the server management routes.
///
/// Runs before any body extraction, so unauthenticated requests are rejected before
/// uploads are read.
pub async fn require_manage_servers(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user =
        AuthGuard::new(&state.jwt_key, request.headers()).require(&[Permission::ManageServers])?;

    tracing::debug!(
        "Authorized {} ({}) for server management",
        user.subject,
        user.role.name()
    );

    Ok(next.run(request).await)
}
