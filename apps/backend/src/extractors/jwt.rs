use actix_web::http::header::HeaderValue;

use crate::error::AppError;

/// Parse `Bearer <token>`. `Ok(None)` means no header at all.
pub fn bearer_token(header: Option<&HeaderValue>) -> Result<Option<String>, AppError> {
    let Some(value) = header else {
        return Ok(None);
    };
    let raw = value
        .to_str()
        .map_err(|_| AppError::unauthorized_missing_bearer())?;

    let mut parts = raw.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) if !token.is_empty() => Ok(Some(token.to_string())),
        _ => Err(AppError::unauthorized_missing_bearer()),
    }
}
