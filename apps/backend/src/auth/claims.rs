//! Claims carried by access tokens and stored in request extensions.

use serde::{Deserialize, Serialize};

/// Verified token claims inserted into request extensions by `JwtExtract`.
///
/// `sub` is the external identity and doubles as the roster key.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct BackendClaims {
    pub sub: String,
    pub email: String,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}
