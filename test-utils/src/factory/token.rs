//! Access token factory for authenticating test requests.

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::json;

use crate::{factory::helpers::next_id, TEST_JWT_SECRET};

/// Factory for signing HS256 access tokens.
///
/// Tokens are signed with [`TEST_JWT_SECRET`] unless another secret is given.
pub struct TokenFactory {
    subject: String,
    role: String,
    token_type: String,
    expires_in: Duration,
    secret: String,
}

impl TokenFactory {
    /// Creates a factory for an `admin` access token valid for one hour.
    pub fn new() -> Self {
        Self {
            subject: format!("user-{}", next_id()),
            role: "admin".to_string(),
            token_type: "access".to_string(),
            expires_in: Duration::hours(1),
            secret: TEST_JWT_SECRET.to_string(),
        }
    }

    /// Sets the role claim.
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Sets the token type claim (`access`, `refresh`, ...).
    pub fn token_type(mut self, token_type: impl Into<String>) -> Self {
        self.token_type = token_type.into();
        self
    }

    /// Sets the lifetime relative to now; negative values produce expired tokens.
    pub fn expires_in(mut self, expires_in: Duration) -> Self {
        self.expires_in = expires_in;
        self
    }

    /// Signs with a different secret.
    pub fn secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = secret.into();
        self
    }

    /// Signs the token.
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded JWT
    /// - `Err(jsonwebtoken::errors::Error)` - Encoding failed
    pub fn build(self) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let claims = json!({
            "sub": self.subject,
            "role": self.role,
            "type": self.token_type,
            "iat": now.timestamp(),
            "exp": (now + self.expires_in).timestamp(),
        });

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
    }
}

impl Default for TokenFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Signs an access token for the `admin` role.
pub fn admin_token() -> Result<String, jsonwebtoken::errors::Error> {
    TokenFactory::new().build()
}

/// Signs an access token for the `user` role.
pub fn user_token() -> Result<String, jsonwebtoken::errors::Error> {
    TokenFactory::new().role("user").build()
}
