use std::future::Future;
use std::time::Duration;

use migration::{migrate, MigrationCommand, Migrator, MigratorTrait};
use rand::Rng;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};
use tracing::{info, trace, warn};
use xxhash_rust::xxh3::xxh3_64;

use crate::config::db::{
    make_conn_spec, pool_settings, validate_db_config, DbKind, DbOwner, RuntimeEnv,
};
use crate::error::DbInfraError;

const CONNECT_ATTEMPTS: u32 = 5;
const CONNECT_INTERVAL_MS: u64 = 500;

async fn retry_connection<T, F, Fut>(
    mut connect_fn: F,
    max_attempts: u32,
    interval_ms: u64,
) -> Result<T, DbInfraError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, DbInfraError>>,
{
    let mut last_error = None;

    for attempt in 1..=max_attempts {
        match connect_fn().await {
            Ok(result) => {
                if attempt > 1 {
                    info!(attempts = attempt, interval_ms, "connection_retry=success");
                }
                return Ok(result);
            }
            Err(e) => {
                last_error = Some(e);
                if attempt < max_attempts {
                    let jitter_ms = rand::rng().random_range(0..interval_ms / 4 + 1);
                    warn!(
                        attempt,
                        max_attempts,
                        interval_ms,
                        "connection_retry=failed"
                    );
                    tokio::time::sleep(Duration::from_millis(interval_ms + jitter_ms)).await;
                }
            }
        }
    }

    Err(last_error.unwrap_or_else(|| DbInfraError::Connect {
        message: "no error recorded after max attempts".to_string(),
    }))
}

/// Open a pool for the given environment, engine and owner.
///
/// Postgres connections are retried because the database container may still
/// be starting; SQLite connections fail fast.
pub async fn build_pool(
    env: RuntimeEnv,
    db_kind: DbKind,
    owner: DbOwner,
) -> Result<DatabaseConnection, DbInfraError> {
    validate_db_config(env, db_kind)?;
    let url = make_conn_spec(env, db_kind, owner)?;
    let settings = pool_settings(env, db_kind, owner);

    let mut opt = ConnectOptions::new(&url);
    opt.min_connections(settings.min_connections)
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .sqlx_logging(false);

    if db_kind == DbKind::SqliteMemory {
        // Recycling the only connection would drop the whole database
        opt.idle_timeout(Duration::from_secs(24 * 60 * 60))
            .max_lifetime(Duration::from_secs(24 * 60 * 60));
    }

    let sanitized = sanitize_db_url(&url);
    let connect = || {
        let opt = opt.clone();
        let sanitized = sanitized.clone();
        async move {
            Database::connect(opt)
                .await
                .map_err(|e| DbInfraError::Connect {
                    message: format!("failed to connect to {sanitized}: {e}"),
                })
        }
    };

    let pool = if db_kind == DbKind::Postgres {
        retry_connection(connect, CONNECT_ATTEMPTS, CONNECT_INTERVAL_MS).await?
    } else {
        connect().await?
    };

    info!(env = ?env, db_kind = ?db_kind, owner = ?owner, url = %sanitized, "db pool ready");
    Ok(pool)
}

/// Sanitize database URL by masking the password.
pub fn sanitize_db_url(url: &str) -> String {
    let Some((auth_part, host_part)) = url.split_once('@') else {
        return url.to_string();
    };
    match auth_part.rfind(':') {
        // `postgresql://user` still contains the scheme colon; only mask when a
        // password separator follows the user name.
        Some(colon_pos) if !auth_part[colon_pos..].starts_with("://") => {
            format!("{}:***@{}", &auth_part[..colon_pos], host_part)
        }
        _ => url.to_string(),
    }
}

/// True when every defined migration is already applied.
async fn schema_is_current(conn: &DatabaseConnection) -> Result<bool, DbInfraError> {
    let expected_last = Migrator::migrations()
        .last()
        .map(|m| m.name().to_string())
        .unwrap_or_default();
    let expected_count = Migrator::migrations().len();

    let applied = match Migrator::get_applied_migrations(conn).await {
        Ok(applied) => applied,
        Err(DbErr::Exec(_)) => {
            trace!(fastpath = "miss", reason = "migration_table_missing");
            return Ok(false);
        }
        Err(e) => {
            return Err(DbInfraError::Migration {
                message: format!("failed to get applied migrations: {e}"),
            })
        }
    };

    let current_last = applied.last().map(|m| m.name().to_string());
    let up_to_date = applied.len() == expected_count
        && !expected_last.is_empty()
        && current_last.as_deref() == Some(expected_last.as_str());

    trace!(
        fastpath = if up_to_date { "hit" } else { "miss" },
        applied = applied.len(),
        expected = expected_count,
        current_last = %current_last.as_deref().unwrap_or(""),
        expected_last = %expected_last
    );
    Ok(up_to_date)
}

/// Open an owner pool and run `command` against it.
pub async fn orchestrate_migration(
    env: RuntimeEnv,
    db_kind: DbKind,
    command: MigrationCommand,
) -> Result<(), DbInfraError> {
    let admin_pool = build_pool(env, db_kind, DbOwner::Owner).await?;
    orchestrate_migration_internal(&admin_pool, db_kind, command).await
}

/// Run `command` on an existing pool.
///
/// `Up` is skipped when the schema is already current. On Postgres the run is
/// serialized across processes with an advisory lock so that several backend
/// replicas booting together migrate once.
pub async fn orchestrate_migration_internal(
    pool: &DatabaseConnection,
    db_kind: DbKind,
    command: MigrationCommand,
) -> Result<(), DbInfraError> {
    info!(db_kind = ?db_kind, command = ?command, "migrate=start");

    if command == MigrationCommand::Up && schema_is_current(pool).await? {
        info!("migrate=skipped up_to_date=true");
        return Ok(());
    }

    let result = if db_kind == DbKind::Postgres && command.mutates() {
        let lock_key = xxh3_64(b"fantasy:migrate") as i64;
        pg_advisory(pool, "pg_advisory_lock", lock_key).await?;
        let outcome = run_migration(pool, command).await;
        if let Err(e) = pg_advisory(pool, "pg_advisory_unlock", lock_key).await {
            warn!(error = %e, "failed to release migration advisory lock");
        }
        outcome
    } else {
        run_migration(pool, command).await
    };

    info!(ok = result.is_ok(), "migrate=done");
    result
}

async fn run_migration(
    pool: &DatabaseConnection,
    command: MigrationCommand,
) -> Result<(), DbInfraError> {
    migrate(pool, command)
        .await
        .map_err(|e| DbInfraError::Migration {
            message: format!("migration execution failed: {e}"),
        })
}

async fn pg_advisory(
    pool: &DatabaseConnection,
    function: &str,
    key: i64,
) -> Result<(), DbInfraError> {
    let stmt = Statement::from_string(
        pool.get_database_backend(),
        format!("SELECT {function}({key})"),
    );
    pool.execute(stmt)
        .await
        .map(|_| ())
        .map_err(|e| DbInfraError::Migration {
            message: format!("{function} failed: {e}"),
        })
}

/// Connect the application pool with the schema migrated to the latest version.
///
/// In-memory SQLite lives and dies with its single connection, so the same
/// pool is migrated and returned. Other engines migrate through an owner pool
/// first and then hand out an app-credential pool.
pub async fn bootstrap_db(
    env: RuntimeEnv,
    db_kind: DbKind,
) -> Result<DatabaseConnection, DbInfraError> {
    match db_kind {
        DbKind::SqliteMemory => {
            let pool = build_pool(env, db_kind, DbOwner::App).await?;
            orchestrate_migration_internal(&pool, db_kind, MigrationCommand::Up).await?;
            Ok(pool)
        }
        DbKind::SqliteFile => {
            // A file database has no separate roles
            let pool = build_pool(env, db_kind, DbOwner::App).await?;
            orchestrate_migration_internal(&pool, db_kind, MigrationCommand::Up).await?;
            Ok(pool)
        }
        DbKind::Postgres => {
            orchestrate_migration(env, db_kind, MigrationCommand::Up).await?;
            build_pool(env, db_kind, DbOwner::App).await
        }
    }
}
