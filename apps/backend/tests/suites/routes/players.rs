use actix_web::http::StatusCode;
use actix_web::test;
use fantasy_backend::db::require_db;
use fantasy_backend::error::AppError;
use serde_json::{json, Value};

use crate::common::assert_problem;
use crate::support::auth::bearer;
use crate::support::factory::seed_player;
use crate::support::{build_test_state, create_test_app};

#[tokio::test]
async fn lists_catalog_by_name() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    seed_player(db, "Zoe", "Storm", [1.0, 2.0, 3.0, 4.0]).await?;
    seed_player(db, "Ana", "Flyers", [5.0, 6.0, 7.0, 8.0]).await?;
    seed_player(db, "Max", "Flyers", [0.5, 0.5, 0.5, 0.5]).await?;

    let app = create_test_app(state).with_prod_routes().build().await;
    let req = test::TestRequest::get()
        .uri("/api/players")
        .insert_header(bearer("user-list"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Vec<Value> = test::read_body_json(resp).await;
    let names: Vec<&str> = body.iter().map(|p| p["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["Ana", "Max", "Zoe"]);
    assert_eq!(
        body[0]["scores"],
        json!({"captain": 5.0, "handler": 6.0, "cutter": 7.0, "defender": 8.0})
    );
    assert_eq!(body[0]["team"], "Flyers");
    assert_eq!(body[0]["questionable"], false);
    Ok(())
}

#[tokio::test]
async fn empty_catalog_is_empty_list() -> Result<(), AppError> {
    let app = create_test_app(build_test_state().await?)
        .with_prod_routes()
        .build()
        .await;
    let req = test::TestRequest::get()
        .uri("/api/players")
        .insert_header(bearer("user-empty"))
        .to_request();
    let body: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert!(body.is_empty());
    Ok(())
}

#[tokio::test]
async fn get_player_by_name() -> Result<(), AppError> {
    let state = build_test_state().await?;
    seed_player(require_db(&state)?, "Ana Lee", "Flyers", [5.0, 6.0, 7.0, 8.0]).await?;

    let app = create_test_app(state).with_prod_routes().build().await;
    let req = test::TestRequest::get()
        .uri("/api/players/Ana%20Lee")
        .insert_header(bearer("user-one"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "Ana Lee");
    assert_eq!(body["price"], 12.5);
    assert_eq!(body["tournament_name"], "Nationals");
    Ok(())
}

#[tokio::test]
async fn unknown_player_is_404() -> Result<(), AppError> {
    let app = create_test_app(build_test_state().await?)
        .with_prod_routes()
        .build()
        .await;
    let req = test::TestRequest::get()
        .uri("/api/players/Nobody")
        .insert_header(bearer("user-404"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let problem = assert_problem(resp, StatusCode::NOT_FOUND, "PLAYER_NOT_FOUND").await;
    assert!(problem.detail.contains("Nobody"));
    Ok(())
}

#[tokio::test]
async fn eligible_positions_for_fresh_user() -> Result<(), AppError> {
    let app = create_test_app(build_test_state().await?)
        .with_prod_routes()
        .build()
        .await;
    let req = test::TestRequest::get()
        .uri("/api/players/Alex/positions")
        .insert_header(bearer("user-fresh"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["player"], "Alex");
    assert_eq!(
        body["positions"],
        json!(["captain", "handler", "cutter", "defender"])
    );
    Ok(())
}

#[tokio::test]
async fn eligible_positions_reflect_full_groups() -> Result<(), AppError> {
    let app = create_test_app(build_test_state().await?)
        .with_prod_routes()
        .build()
        .await;

    for (player, position) in [("Bo", "handler"), ("Cy", "handler"), ("Eli", "captain")] {
        let req = test::TestRequest::post()
            .uri("/api/team/players")
            .insert_header(bearer("user-full"))
            .set_json(json!({"player": player, "position": position}))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }

    let req = test::TestRequest::get()
        .uri("/api/players/Dee/positions")
        .insert_header(bearer("user-full"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["positions"], json!(["cutter", "defender"]));

    let req = test::TestRequest::get()
        .uri("/api/players/Bo/positions")
        .insert_header(bearer("user-full"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["positions"], json!(["handler", "cutter", "defender"]));
    Ok(())
}
