use std::time::Instant;

use sea_orm::DatabaseConnection;

use super::security_config::SecurityConfig;

/// Shared resources handed to every handler via `web::Data`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Absent only in tests that never touch storage
    db: Option<DatabaseConnection>,
    pub security: SecurityConfig,
    started_at: Instant,
}

impl AppState {
    pub fn new(db: DatabaseConnection, security: SecurityConfig) -> Self {
        Self {
            db: Some(db),
            security,
            started_at: Instant::now(),
        }
    }

    pub fn new_without_db(security: SecurityConfig) -> Self {
        Self {
            db: None,
            security,
            started_at: Instant::now(),
        }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }

    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
