//! JWT Authentication Middleware
//!
//! Extracts and validates JWT tokens from requests.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::infrastructure::driven_adapters::config::{AppConfig, JwtConfig};
use crate::shared::errors::{AppError, UNAUTHORIZED};

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    pub email: String,
    pub role: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Claims for `sub` valid for the configured lifetime
    #[must_use]
    pub fn new(
        sub: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
        config: &JwtConfig,
    ) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            sub: sub.into(),
            email: email.into(),
            role: role.into(),
            iat: now,
            exp: now + config.expires_in_secs,
        }
    }

    /// Sign these claims with the configured HS256 secret
    ///
    /// # Errors
    ///
    /// Returns the signing error from `jsonwebtoken`.
    pub fn sign(&self, config: &JwtConfig) -> Result<String, jsonwebtoken::errors::Error> {
        encode(
            &Header::new(Algorithm::HS256),
            self,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
    }
}

/// Authenticated user extracted from JWT
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: String,
    pub email: String,
    pub role: String,
}

impl From<Claims> for AuthenticatedUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            email: claims.email,
            role: claims.role,
        }
    }
}

/// JWT authentication extractor
pub struct JwtAuth(pub AuthenticatedUser);

fn unauthorized(reason: &str) -> AppError {
    UNAUTHORIZED
        .to_error()
        .with_function("JwtAuth")
        .push_message(reason)
}

#[async_trait]
impl<S> FromRequestParts<S> for JwtAuth
where
    Arc<AppConfig>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let config = Arc::<AppConfig>::from_ref(state);

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| unauthorized("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| unauthorized("Invalid Authorization header format"))?;

        // Pin the algorithm; never trust the token header's choice.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 60;

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(config.jwt.secret.as_bytes()),
            &validation,
        )
        .map_err(|_| unauthorized("Invalid or expired token"))?;

        tracing::debug!(user = %token_data.claims.sub, "Authenticated request");
        Ok(JwtAuth(token_data.claims.into()))
    }
}
