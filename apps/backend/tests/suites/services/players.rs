use fantasy_backend::db::require_db;
use fantasy_backend::domain::fixtures::scored_player;
use fantasy_backend::error::AppError;
use fantasy_backend::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use fantasy_backend::repos::{InMemoryCatalog, SeaPlayerCatalog};
use fantasy_backend::services::players::{get_player, list_players};

use crate::support::build_test_state;
use crate::support::factory::seed_player;

#[tokio::test]
async fn in_memory_listing_is_sorted() -> Result<(), AppError> {
    let catalog = InMemoryCatalog::new([
        scored_player("Zoe", "Storm", [1.0; 4]),
        scored_player("Ana", "Flyers", [2.0; 4]),
    ]);
    let names: Vec<String> = list_players(&catalog)
        .await?
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, ["Ana", "Zoe"]);
    Ok(())
}

#[tokio::test]
async fn missing_player_is_not_found() {
    let catalog = InMemoryCatalog::default();
    let err = get_player(&catalog, "Nobody").await.unwrap_err();
    assert_eq!(
        err,
        DomainError::NotFound(NotFoundKind::Player, "Player 'Nobody' not found".into())
    );
}

#[tokio::test]
async fn blank_name_is_invalid() {
    let catalog = InMemoryCatalog::default();
    let err = get_player(&catalog, "").await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::InvalidPlayerName, _)
    ));
}

#[tokio::test]
async fn sea_catalog_maps_rows() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    seed_player(db, "Ana", "Flyers", [5.0, 6.0, 7.0, 8.0]).await?;

    let catalog = SeaPlayerCatalog::new(db);
    let ana = get_player(&catalog, "Ana").await?;
    assert_eq!(ana.team, "Flyers");
    assert_eq!(ana.captain_score, 5.0);
    assert_eq!(ana.defender_score, 8.0);
    assert_eq!(ana.price, 12.5);
    assert!(!ana.questionable);

    // Exact match only
    assert!(get_player(&catalog, "ana").await.is_err());
    Ok(())
}

#[tokio::test]
async fn sea_catalog_duplicate_names_keep_first_row() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    seed_player(db, "Sam", "Flyers", [3.0; 4]).await?;
    seed_player(db, "Sam", "Storm", [9.0; 4]).await?;

    let catalog = SeaPlayerCatalog::new(db);
    let sam = get_player(&catalog, "Sam").await?;
    assert_eq!(sam.team, "Flyers");

    let listed = list_players(&catalog).await?;
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].team, "Flyers");
    Ok(())
}

#[tokio::test]
async fn questionable_flag_is_advisory() -> Result<(), AppError> {
    use fantasy_backend::adapters::live_scores_sea::{self, LiveScoreCreate};
    use fantasy_backend::domain::Position;
    use fantasy_backend::repos::SeaRosterStore;
    use fantasy_backend::services::team::assign_player;

    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let dto = LiveScoreCreate::new("Quinn", "Storm")
        .with_scores([6.0, 5.0, 4.0, 3.0])
        .questionable();
    live_scores_sea::insert(db, dto).await?;

    let quinn = get_player(&SeaPlayerCatalog::new(db), "Quinn").await?;
    assert!(quinn.questionable);

    // Flagged players can still be drafted
    let store = SeaRosterStore::new(db);
    let roster = assign_player(
        &store,
        "u-quinn",
        "Quinn",
        Position::Captain,
        time::OffsetDateTime::now_utc(),
    )
    .await?;
    assert_eq!(roster.captain.as_deref(), Some("Quinn"));
    Ok(())
}
