use std::env;

use db_infra::config::db::DbKind;

use crate::error::AppError;

/// Process-level settings read from the environment at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub db_kind: DbKind,
}

impl ServerConfig {
    /// Environment variables must be set by the runtime environment
    /// (docker `env_file`, or `set -a; . ./.env; set +a` locally).
    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match env::var("BACKEND_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| AppError::config("BACKEND_PORT must be a valid port number"))?,
            Err(_) => 3001,
        };

        let jwt_secret = env::var("BACKEND_JWT_SECRET")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::config("BACKEND_JWT_SECRET must be set"))?;

        let db_kind = match env::var("BACKEND_DB_KIND") {
            Ok(raw) => DbKind::parse(&raw).ok_or_else(|| {
                AppError::config(format!("BACKEND_DB_KIND '{raw}' is not supported"))
            })?,
            Err(_) => DbKind::Postgres,
        };
        if db_kind == DbKind::SqliteMemory {
            return Err(AppError::config(
                "BACKEND_DB_KIND=sqlite-memory is only available to tests",
            ));
        }

        Ok(Self {
            host,
            port,
            jwt_secret,
            db_kind,
        })
    }
}
