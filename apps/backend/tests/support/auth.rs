//! JWT helpers for tests

use std::time::{Duration, SystemTime};

use fantasy_backend::auth::jwt::mint_access_token;

use super::test_security;

pub fn mint_test_token(sub: &str) -> String {
    mint_access_token(
        sub,
        &format!("{sub}@example.com"),
        SystemTime::now(),
        &test_security(),
    )
    .expect("should mint token")
}

/// Full `Authorization` header value for `sub`.
pub fn bearer(sub: &str) -> (String, String) {
    ("Authorization".to_string(), format!("Bearer {}", mint_test_token(sub)))
}

pub fn mint_expired_token(sub: &str) -> String {
    let two_hours_ago = SystemTime::now() - Duration::from_secs(2 * 60 * 60);
    mint_access_token(sub, "old@example.com", two_hours_ago, &test_security())
        .expect("should mint expired token")
}
