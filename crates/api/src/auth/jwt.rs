//! Bearer-token validation.
//!
//! External API consumers present HS256-signed JWTs issued by the identity
//! provider. This service only verifies them; it never mints tokens.

use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

/// Claims this service reads from an access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the caller's identity at the issuer.
    pub sub: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    #[serde(default)]
    pub iat: Option<i64>,
}

/// Configuration for JWT validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret shared with the token issuer.
    pub secret: String,
}

impl JwtConfig {
    /// Load from `API_JWT_SECRET`. Returns `None` when the variable is unset
    /// or blank, which disables bearer authentication.
    pub fn from_env() -> Option<Self> {
        std::env::var("API_JWT_SECRET")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(|secret| Self { secret })
    }
}

/// Validate and decode an access token, returning the embedded [`Claims`].
///
/// Validates the signature and expiration.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;
    Ok(token_data.claims)
}
