use actix_web::{web, HttpResponse};
use migration::get_latest_migration_version;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use serde::Serialize;
use time::OffsetDateTime;

use super::rfc3339;
use crate::db::require_db;
use crate::entities::LiveScores;
use crate::error::AppError;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    app_version: &'static str,
    uptime_secs: u64,
    db: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    db_error: Option<String>,
    migrations: String,
    /// Rows in the stats catalog; 0 until the pipeline has run
    #[serde(skip_serializing_if = "Option::is_none")]
    catalog_players: Option<u64>,
    time: String,
}

struct DbProbe {
    error: Option<String>,
    migrations: String,
    catalog_players: Option<u64>,
}

impl DbProbe {
    fn failed(error: String) -> Self {
        Self {
            error: Some(error),
            migrations: "unknown".to_string(),
            catalog_players: None,
        }
    }
}

/// Counting the catalog doubles as the connectivity check.
async fn probe(db: &DatabaseConnection) -> DbProbe {
    let catalog_players = match LiveScores::find().count(db).await {
        Ok(count) => count,
        Err(e) => return DbProbe::failed(format!("DB query failed: {e}")),
    };
    let migrations = match get_latest_migration_version(db).await {
        Ok(Some(version)) => version,
        Ok(None) => "no_migrations".to_string(),
        Err(_) => "unknown".to_string(),
    };
    DbProbe {
        error: None,
        migrations,
        catalog_players: Some(catalog_players),
    }
}

/// Liveness plus a DB probe; always 200 so orchestrators can read the body.
async fn health(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let probe = match require_db(&app_state) {
        Ok(db) => probe(db).await,
        Err(e) => DbProbe::failed(format!("DB unavailable: {e}")),
    };

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        app_version: env!("CARGO_PKG_VERSION"),
        uptime_secs: app_state.uptime_secs(),
        db: if probe.error.is_none() { "ok" } else { "error" },
        db_error: probe.error,
        migrations: probe.migrations,
        catalog_players: probe.catalog_players,
        time: rfc3339(OffsetDateTime::now_utc()),
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}
