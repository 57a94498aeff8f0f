use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use super::claims::BackendClaims;
use crate::error::AppError;
use crate::state::security_config::SecurityConfig;

/// Mint an access token valid for `security.access_ttl` from `now`.
///
/// Tokens are normally issued by the identity provider sharing this secret;
/// the backend only mints them for local tooling and tests.
pub fn mint_access_token(
    sub: &str,
    email: &str,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    let iat = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AppError::internal("Failed to get current time"))?
        .as_secs() as i64;

    let claims = BackendClaims {
        sub: sub.to_string(),
        email: email.to_string(),
        iat,
        exp: iat + security.access_ttl.as_secs() as i64,
    };

    encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| AppError::internal(format!("Failed to encode JWT: {e}")))
}

/// Verify signature and expiry, pinned to the configured algorithm.
pub fn verify_access_token(
    token: &str,
    security: &SecurityConfig,
) -> Result<BackendClaims, AppError> {
    let mut validation = Validation::new(security.algorithm);
    validation.leeway = security.leeway_secs;

    decode::<BackendClaims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => AppError::unauthorized_expired_jwt(),
        _ => AppError::unauthorized_invalid_jwt(),
    })
}
