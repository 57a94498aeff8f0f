use actix_web::http::StatusCode;
use actix_web::test;
use fantasy_backend::error::AppError;
use serde_json::Value;

use crate::support::test_state::build_state_without_db;
use crate::support::{build_test_state, create_test_app};

#[tokio::test]
async fn health_reports_db_and_migration() -> Result<(), AppError> {
    let app = create_test_app(build_test_state().await?)
        .with_prod_routes()
        .build()
        .await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "ok");
    assert_eq!(body["migrations"], "m20251018_000001_init");
    assert!(body.get("db_error").is_none());
    assert_eq!(body["catalog_players"], 0);
    assert!(body["time"].as_str().unwrap().contains('T'));
    Ok(())
}

#[tokio::test]
async fn health_without_db_still_answers() -> Result<(), AppError> {
    let app = create_test_app(build_state_without_db().await?)
        .with_prod_routes()
        .build()
        .await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["db"], "error");
    assert_eq!(body["migrations"], "unknown");
    assert!(body.get("catalog_players").is_none());
    assert!(body["db_error"].as_str().unwrap().contains("unavailable"));
    Ok(())
}

#[tokio::test]
async fn health_needs_no_token() -> Result<(), AppError> {
    let app = create_test_app(build_test_state().await?)
        .with_prod_routes()
        .build()
        .await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert!(resp.headers().contains_key("x-request-id"));
    assert_eq!(resp.status(), StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn health_counts_catalog_rows() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = fantasy_backend::db::require_db(&state)?;
    crate::support::factory::seed_player(db, "Ana", "Flyers", [1.0; 4]).await?;
    crate::support::factory::seed_player(db, "Bo", "Storm", [1.0; 4]).await?;

    let app = create_test_app(state).with_prod_routes().build().await;
    let body: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/health").to_request())
            .await;
    assert_eq!(body["catalog_players"], 2);
    Ok(())
}
