use db_infra::config::db::{DbKind, RuntimeEnv};
use fantasy_backend::error::AppError;
use fantasy_backend::infra::state::build_state;
use fantasy_backend::state::app_state::AppState;
use fantasy_backend::state::security_config::SecurityConfig;

pub fn test_security() -> SecurityConfig {
    SecurityConfig::new("integration-test-secret".as_bytes())
}

/// Fresh, migrated in-memory database per call; tests never share rows.
pub async fn build_test_state() -> Result<AppState, AppError> {
    build_state()
        .with_env(RuntimeEnv::Test)
        .with_db(DbKind::SqliteMemory)
        .with_security(test_security())
        .build()
        .await
}

/// State with no database at all, for 503 paths.
pub async fn build_state_without_db() -> Result<AppState, AppError> {
    build_state().with_security(test_security()).build().await
}
