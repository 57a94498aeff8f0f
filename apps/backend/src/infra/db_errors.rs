//! SeaORM -> DomainError translation helpers.
//!
//! Adapters return `sea_orm::DbErr`; repos convert it here into
//! `crate::errors::domain::DomainError`, and handlers map that to `AppError`.

use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::logging::pii::Redacted;
use crate::trace_ctx;

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

/// Extract `table.column` from SQLite "UNIQUE constraint failed: table.column".
fn extract_sqlite_table_column(error_msg: &str) -> Option<&str> {
    let marker = "UNIQUE constraint failed: ";
    let start = error_msg.find(marker)? + marker.len();
    error_msg[start..]
        .split(|c: char| c.is_whitespace() || c == '"' || c == ',')
        .next()
        .filter(|s| !s.is_empty())
}

fn is_user_teams_unique(error_msg: &str) -> bool {
    extract_sqlite_table_column(error_msg) == Some("user_teams.user_id")
        || error_msg.contains("ux_user_teams_user_id")
}

fn is_missing_table(error_msg: &str) -> bool {
    mentions_sqlstate(error_msg, "42P01")
        || error_msg.contains("no such table")
        || (error_msg.contains("relation") && error_msg.contains("does not exist"))
}

/// Translate a `DbErr` into a `DomainError` with sanitized, PII-safe detail.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            return DomainError::not_found(NotFoundKind::Record, "Record not found");
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    if mentions_sqlstate(&error_msg, "23505")
        || error_msg.contains("duplicate key value violates unique constraint")
        || error_msg.contains("UNIQUE constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Unique constraint violation");
        if is_user_teams_unique(&error_msg) {
            return DomainError::conflict(ConflictKind::Unique, "Team already exists for user");
        }
        return DomainError::conflict(ConflictKind::Unique, "Unique constraint violation");
    }

    if mentions_sqlstate(&error_msg, "23503") {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Foreign key constraint violation");
        return DomainError::validation_other("Foreign key constraint violation");
    }

    if mentions_sqlstate(&error_msg, "23514") {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Check constraint violation");
        return DomainError::validation_other("Check constraint violation");
    }

    if is_missing_table(&error_msg) {
        error!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Table missing; schema not migrated?");
        return DomainError::infra(
            InfraErrorKind::Other("MissingTable".into()),
            "Database schema is not initialised",
        );
    }

    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database timeout");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    if error_msg.contains("pool") || error_msg.contains("unavailable") {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database pool issue");
        return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
    }

    if matches!(e, sea_orm::DbErr::Type(_) | sea_orm::DbErr::TryIntoErr { .. }) {
        error!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Row did not decode");
        return DomainError::infra(InfraErrorKind::DataCorruption, "Stored data is malformed");
    }

    error!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        map_db_err(e)
    }
}
