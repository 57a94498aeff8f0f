use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use db_infra::config::db::{DbKind, DbOwner, RuntimeEnv};
use db_infra::{build_pool, orchestrate_migration, DbInfraError};
use migration::{
    count_applied_migrations, get_latest_migration_version, MigrationCommand, Migrator,
    MigratorTrait,
};
use tracing::{error, info};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Command {
    /// Apply pending migrations
    Up,
    /// Roll back the last migration
    Down,
    /// Drop everything and re-apply
    Fresh,
    /// Roll back every migration
    Reset,
    /// Reset, then up
    Refresh,
    /// Print applied vs defined migrations
    Status,
}

impl From<Command> for MigrationCommand {
    fn from(command: Command) -> Self {
        match command {
            Command::Up => MigrationCommand::Up,
            Command::Down => MigrationCommand::Down,
            Command::Fresh => MigrationCommand::Fresh,
            Command::Reset => MigrationCommand::Reset,
            Command::Refresh => MigrationCommand::Refresh,
            Command::Status => MigrationCommand::Status,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Env {
    Prod,
    Test,
}

/// In-memory SQLite is not offered: the schema would vanish with the process.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Db {
    Postgres,
    SqliteFile,
}

#[derive(Parser, Debug)]
#[command(name = "migration", about = "Schema migrations for the fantasy team database")]
struct Args {
    #[arg(value_enum)]
    command: Command,

    #[arg(short, long, value_enum, default_value = "test")]
    env: Env,

    /// Defaults to `BACKEND_DB_KIND`, then postgres
    #[arg(short, long, value_enum)]
    db: Option<Db>,
}

fn resolve_db(flag: Option<Db>) -> Result<DbKind, DbInfraError> {
    if let Some(db) = flag {
        return Ok(match db {
            Db::Postgres => DbKind::Postgres,
            Db::SqliteFile => DbKind::SqliteFile,
        });
    }
    match std::env::var("BACKEND_DB_KIND") {
        Err(_) => Ok(DbKind::Postgres),
        Ok(raw) => match DbKind::parse(&raw) {
            Some(DbKind::SqliteMemory) => Err(DbInfraError::config(
                "sqlite-memory cannot be migrated from the CLI",
            )),
            Some(kind) => Ok(kind),
            None => Err(DbInfraError::config(format!(
                "unknown BACKEND_DB_KIND '{raw}'"
            ))),
        },
    }
}

async fn print_status(env: RuntimeEnv, db_kind: DbKind) -> Result<(), DbInfraError> {
    let pool = build_pool(env, db_kind, DbOwner::Owner).await?;
    let to_infra = |e: migration::DbErr| DbInfraError::Migration {
        message: e.to_string(),
    };
    let applied = count_applied_migrations(&pool).await.map_err(to_infra)?;
    let latest = get_latest_migration_version(&pool).await.map_err(to_infra)?;
    let defined = Migrator::migrations().len();

    println!("applied: {applied}/{defined}");
    println!("latest:  {}", latest.as_deref().unwrap_or("-"));
    Ok(())
}

async fn run(args: Args) -> Result<(), DbInfraError> {
    let env = match args.env {
        Env::Prod => RuntimeEnv::Prod,
        Env::Test => RuntimeEnv::Test,
    };
    let db_kind = resolve_db(args.db)?;
    info!(command = ?args.command, env = ?env, db_kind = ?db_kind, "migration cli");

    match args.command {
        Command::Status => print_status(env, db_kind).await,
        command => orchestrate_migration(env, db_kind, command.into()).await,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_env_filter("migration=info,db_infra=info,sqlx=warn")
        .init();

    match run(Args::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "migration failed");
            ExitCode::FAILURE
        }
    }
}
