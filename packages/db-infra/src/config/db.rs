use std::env;
use std::time::Duration;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::error::DbInfraError;

/// Runtime environment the process is configured for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnv {
    Prod,
    Test,
}

/// Database engine + storage flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    Postgres,
    SqliteFile,
    /// Ephemeral database; every pool gets its own copy, so it is only
    /// usable with a single-connection pool.
    SqliteMemory,
}

impl DbKind {
    /// Parse the spelling used by `BACKEND_DB_KIND` and the CLI.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Some(Self::Postgres),
            "sqlite-file" | "sqlite_file" | "sqlite" => Some(Self::SqliteFile),
            "sqlite-memory" | "sqlite_memory" => Some(Self::SqliteMemory),
            _ => None,
        }
    }
}

/// Which credentials a pool connects with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbOwner {
    /// Application-level access (limited permissions)
    App,
    /// Owner-level access (full permissions for migrations)
    Owner,
}

/// Connection pool sizing for a given purpose
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolSettings {
    pub min_connections: u32,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

/// Reject combinations that cannot work before any connection is attempted.
pub fn validate_db_config(env: RuntimeEnv, db_kind: DbKind) -> Result<(), DbInfraError> {
    if env == RuntimeEnv::Prod && db_kind == DbKind::SqliteMemory {
        return Err(DbInfraError::config(
            "in-memory SQLite is not allowed in the prod environment",
        ));
    }
    Ok(())
}

/// Build the connection string for an environment, engine and owner.
pub fn make_conn_spec(
    env: RuntimeEnv,
    db_kind: DbKind,
    owner: DbOwner,
) -> Result<String, DbInfraError> {
    match db_kind {
        DbKind::Postgres => postgres_url(env, owner),
        DbKind::SqliteFile => Ok(format!("sqlite://{}?mode=rwc", sqlite_path(env))),
        DbKind::SqliteMemory => Ok("sqlite::memory:".to_string()),
    }
}

pub fn pool_settings(env: RuntimeEnv, db_kind: DbKind, owner: DbOwner) -> PoolSettings {
    match (db_kind, owner) {
        (DbKind::SqliteMemory, _) | (_, DbOwner::Owner) => PoolSettings {
            min_connections: 1,
            max_connections: 1,
            acquire_timeout: Duration::from_secs(2),
        },
        (DbKind::SqliteFile, DbOwner::App) => PoolSettings {
            min_connections: 1,
            max_connections: 4,
            acquire_timeout: Duration::from_secs(5),
        },
        (DbKind::Postgres, DbOwner::App) => PoolSettings {
            min_connections: 2,
            max_connections: match env {
                RuntimeEnv::Prod => 16,
                RuntimeEnv::Test => 4,
            },
            acquire_timeout: Duration::from_secs(5),
        },
    }
}

fn postgres_url(env: RuntimeEnv, owner: DbOwner) -> Result<String, DbInfraError> {
    let host = env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string());
    let port = env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string());
    let db_name = db_name(env)?;
    let (username, password) = credentials(owner)?;

    let password = utf8_percent_encode(&password, NON_ALPHANUMERIC);
    Ok(format!(
        "postgresql://{username}:{password}@{host}:{port}/{db_name}"
    ))
}

fn db_name(env: RuntimeEnv) -> Result<String, DbInfraError> {
    match env {
        RuntimeEnv::Prod => must_var("PROD_DB"),
        RuntimeEnv::Test => {
            let db_name = must_var("TEST_DB")?;
            // Enforce safety: test DB must end with "_test"
            if !db_name.ends_with("_test") {
                return Err(DbInfraError::config(format!(
                    "Test profile requires database name to end with '_test', but got: '{db_name}'"
                )));
            }
            Ok(db_name)
        }
    }
}

fn credentials(owner: DbOwner) -> Result<(String, String), DbInfraError> {
    match owner {
        DbOwner::App => Ok((must_var("APP_DB_USER")?, must_var("APP_DB_PASSWORD")?)),
        DbOwner::Owner => Ok((
            must_var("FANTASY_OWNER_USER")?,
            must_var("FANTASY_OWNER_PASSWORD")?,
        )),
    }
}

fn sqlite_path(env: RuntimeEnv) -> String {
    env::var("SQLITE_DB_PATH").unwrap_or_else(|_| match env {
        RuntimeEnv::Prod => "./data/fantasy.db".to_string(),
        RuntimeEnv::Test => "./data/fantasy_test.db".to_string(),
    })
}

fn must_var(name: &str) -> Result<String, DbInfraError> {
    env::var(name).map_err(|_| {
        DbInfraError::config(format!("Required environment variable '{name}' is not set"))
    })
}
