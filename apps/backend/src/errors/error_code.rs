//! Error codes for the fantasy team API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that appear
//! in HTTP responses.

use core::fmt;

/// Centralized error codes for the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication
    /// Authentication required
    Unauthorized,
    /// Missing or malformed Bearer token
    UnauthorizedMissingBearer,
    /// Invalid JWT token
    UnauthorizedInvalidJwt,
    /// JWT token has expired
    UnauthorizedExpiredJwt,

    // Request Validation
    /// Position is not one of captain, handler, cutter, defender
    InvalidPosition,
    /// Slot index missing or out of range for the position
    InvalidSlot,
    /// Blank player name
    InvalidPlayerName,
    /// General validation error
    ValidationError,
    /// Malformed request body
    BadRequest,
    /// Request body over the JSON size cap
    PayloadTooLarge,

    // Resource Not Found
    /// Player not in the catalog
    PlayerNotFound,
    /// Record not found (generic 404 for DB-driven not-found)
    RecordNotFound,
    /// General not found error
    NotFound,

    // Business Logic Conflicts
    /// Every slot of the target position is held by another player
    CapacityExceeded,
    /// Unique constraint violation
    UniqueViolation,
    /// Generic conflict
    Conflict,

    // System Errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Database timeout
    DbTimeout,
    /// Stored data does not match the domain model
    DataCorruption,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::UnauthorizedMissingBearer => "UNAUTHORIZED_MISSING_BEARER",
            Self::UnauthorizedInvalidJwt => "UNAUTHORIZED_INVALID_JWT",
            Self::UnauthorizedExpiredJwt => "UNAUTHORIZED_EXPIRED_JWT",

            Self::InvalidPosition => "INVALID_POSITION",
            Self::InvalidSlot => "INVALID_SLOT",
            Self::InvalidPlayerName => "INVALID_PLAYER_NAME",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::PayloadTooLarge => "PAYLOAD_TOO_LARGE",

            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::RecordNotFound => "RECORD_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::CapacityExceeded => "CAPACITY_EXCEEDED",
            Self::UniqueViolation => "UNIQUE_VIOLATION",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
