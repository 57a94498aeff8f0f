pub use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{DatabaseBackend, Statement};
pub use sea_orm_migration::sea_orm::{ConnectionTrait, DatabaseConnection};

mod m20251018_000001_init; // keep filename + module name in sync

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20251018_000001_init::Migration)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationCommand {
    Up,
    Down,
    Fresh,
    Reset,
    Refresh,
    Status,
}

impl MigrationCommand {
    /// Parse the CLI spelling of a command (`up`, `down`, ...).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "up" => Some(Self::Up),
            "down" => Some(Self::Down),
            "fresh" => Some(Self::Fresh),
            "reset" => Some(Self::Reset),
            "refresh" => Some(Self::Refresh),
            "status" => Some(Self::Status),
            _ => None,
        }
    }

    /// Whether running the command can change the schema.
    pub fn mutates(&self) -> bool {
        !matches!(self, Self::Status)
    }
}

/// Run a migration command against an already-open connection.
/// Used by both the CLI and test bootstrap.
pub async fn migrate(db: &DatabaseConnection, command: MigrationCommand) -> Result<(), DbErr> {
    let before = DbDiagnostics::collect(db).await?;

    tracing::info!(
        command = ?command,
        backend = %before.backend,
        database = %before.name,
        defined = before.defined,
        applied = before.applied,
        "migration starting"
    );

    let result = match command {
        MigrationCommand::Up => Migrator::up(db, None).await,
        MigrationCommand::Down => Migrator::down(db, None).await,
        MigrationCommand::Fresh => Migrator::fresh(db).await,
        MigrationCommand::Reset => Migrator::reset(db).await,
        MigrationCommand::Refresh => Migrator::refresh(db).await,
        MigrationCommand::Status => Migrator::status(db).await,
    };

    match result {
        Ok(()) => {
            if command.mutates() {
                let after = DbDiagnostics::collect(db).await?;
                tracing::info!(
                    command = ?command,
                    defined = after.defined,
                    applied = after.applied,
                    "migration finished"
                );
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!(command = ?command, backend = %before.backend, error = %e, "migration failed");
            Err(e)
        }
    }
}

#[derive(Debug)]
struct DbDiagnostics {
    backend: String,
    name: String,
    applied: usize,
    defined: usize,
}

impl DbDiagnostics {
    async fn collect(db: &DatabaseConnection) -> Result<Self, DbErr> {
        let backend = db.get_database_backend();
        let name = match backend {
            DatabaseBackend::Postgres => {
                let stmt = Statement::from_string(
                    backend,
                    "select current_database() as name".to_string(),
                );
                match db.query_one(stmt).await? {
                    Some(row) => row.try_get("", "name")?,
                    None => "<unknown>".to_string(),
                }
            }
            DatabaseBackend::Sqlite => {
                let stmt = Statement::from_string(
                    backend,
                    "SELECT file FROM pragma_database_list WHERE name = 'main'".to_string(),
                );
                match db.query_one(stmt).await? {
                    Some(row) => match row.try_get::<String>("", "file") {
                        Ok(file) if file.is_empty() => ":memory:".to_string(),
                        Ok(file) => file,
                        Err(_) => "<unknown>".to_string(),
                    },
                    None => "<unknown>".to_string(),
                }
            }
            _ => "<unsupported>".to_string(),
        };

        Ok(Self {
            backend: format!("{backend:?}"),
            name,
            applied: count_applied_migrations(db).await.unwrap_or(0),
            defined: Migrator::migrations().len(),
        })
    }
}

/// Count the migrations already applied to the database.
/// Returns 0 if the migration table doesn't exist yet.
pub async fn count_applied_migrations(db: &DatabaseConnection) -> Result<usize, DbErr> {
    match Migrator::get_applied_migrations(db).await {
        Ok(migrations) => Ok(migrations.len()),
        Err(DbErr::Exec(_)) => Ok(0),
        Err(e) => Err(e),
    }
}

/// Name of the latest applied migration, if any.
pub async fn get_latest_migration_version(
    db: &DatabaseConnection,
) -> Result<Option<String>, DbErr> {
    match Migrator::get_applied_migrations(db).await {
        Ok(migrations) => Ok(migrations.last().map(|m| m.name().to_string())),
        Err(DbErr::Exec(_)) => Ok(None),
        Err(e) => Err(e),
    }
}
