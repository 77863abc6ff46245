//! HS256 access tokens carrying the user id as the identity claim.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::errors::AuthError;

/// Claims embedded in every access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id; the only claim used to re-resolve the caller.
    pub sub: i32,
    /// User name at issue time, informational only.
    pub name: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Clone)]
pub struct TokenConfig {
    pub secret: String,
    pub ttl_mins: i64,
}

pub fn issue_token(user_id: i32, user_name: &str, cfg: &TokenConfig) -> Result<String, AuthError> {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims { sub: user_id, name: user_name.to_string(), iat: now, exp: now + cfg.ttl_mins * 60 };
    encode(&Header::default(), &claims, &EncodingKey::from_secret(cfg.secret.as_bytes()))
        .map_err(|e| AuthError::TokenError(e.to_string()))
}

/// Verify signature and expiry.
pub fn verify_token(token: &str, cfg: &TokenConfig) -> Result<Claims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    decode::<Claims>(token, &DecodingKey::from_secret(cfg.secret.as_bytes()), &validation)
        .map(|data| data.claims)
        .map_err(|_| AuthError::InvalidToken)
}
