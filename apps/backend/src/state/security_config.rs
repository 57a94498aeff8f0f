use std::time::Duration;

use jsonwebtoken::Algorithm;

/// Lifetime of access tokens minted by this backend.
pub const DEFAULT_ACCESS_TTL: Duration = Duration::from_secs(15 * 60);

/// Clock skew tolerated when checking `exp`.
const DEFAULT_LEEWAY_SECS: u64 = 30;

/// Shared-secret JWT settings. The identity provider signs with the same
/// secret, so only HS256 is supported.
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    pub jwt_secret: Vec<u8>,
    pub algorithm: Algorithm,
    pub access_ttl: Duration,
    pub leeway_secs: u64,
}

impl SecurityConfig {
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
            access_ttl: DEFAULT_ACCESS_TTL,
            leeway_secs: DEFAULT_LEEWAY_SECS,
        }
    }

    pub fn with_access_ttl(mut self, ttl: Duration) -> Self {
        self.access_ttl = ttl;
        self
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self::new(b"fantasy_dev_secret_for_tests_only".to_vec())
    }
}
