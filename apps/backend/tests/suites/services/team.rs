use async_trait::async_trait;
use fantasy_backend::db::require_db;
use fantasy_backend::domain::fixtures::scored_player;
use fantasy_backend::domain::{Player, Position, Roster, Slot};
use fantasy_backend::error::AppError;
use fantasy_backend::errors::domain::{ConflictKind, DomainError, InfraErrorKind};
use fantasy_backend::repos::{
    InMemoryCatalog, InMemoryRosterStore, PlayerCatalog, RosterStore, SeaPlayerCatalog,
    SeaRosterStore,
};
use fantasy_backend::services::team::{
    assign_player, eligible_positions, remove_slot, score_roster, team_view,
};
use time::macros::datetime;
use time::OffsetDateTime;

use crate::support::build_test_state;
use crate::support::factory::seed_player;

const T0: OffsetDateTime = datetime!(2025-06-01 12:00 UTC);
const T1: OffsetDateTime = datetime!(2025-06-01 13:00 UTC);

fn catalog() -> InMemoryCatalog {
    InMemoryCatalog::new([
        scored_player("A", "Flyers", [10.0, 3.0, 2.0, 1.0]),
        scored_player("B", "Storm", [4.0, 7.0, 5.0, 2.0]),
        scored_player("C", "Storm", [2.0, 2.0, 6.0, 1.0]),
    ])
}

/// Catalog whose every call fails, as when the stats table is unreachable.
struct BrokenCatalog;

#[async_trait]
impl PlayerCatalog for BrokenCatalog {
    async fn list_players(&self) -> Result<Vec<Player>, DomainError> {
        Err(DomainError::infra(InfraErrorKind::DbUnavailable, "down"))
    }

    async fn find_player(&self, _name: &str) -> Result<Option<Player>, DomainError> {
        Err(DomainError::infra(InfraErrorKind::DbUnavailable, "down"))
    }

    async fn find_players(&self, _names: &[String]) -> Result<Vec<Player>, DomainError> {
        Err(DomainError::infra(InfraErrorKind::DbUnavailable, "down"))
    }
}

#[tokio::test]
async fn first_assignment_creates_roster() -> Result<(), DomainError> {
    let store = InMemoryRosterStore::new();
    let roster = assign_player(&store, "u1", "A", Position::Captain, T0).await?;

    assert_eq!(roster.captain.as_deref(), Some("A"));
    assert_eq!(roster.created_at, T0);
    assert_eq!(store.len().await, 1);
    Ok(())
}

#[tokio::test]
async fn team_view_sums_slot_scores() -> Result<(), DomainError> {
    let store = InMemoryRosterStore::new();
    assign_player(&store, "u1", "A", Position::Captain, T0).await?;
    assign_player(&store, "u1", "B", Position::Handler, T1).await?;
    assign_player(&store, "u1", "C", Position::Defender, T1).await?;

    let view = team_view(&catalog(), &store, "u1").await?;
    assert_eq!(view.total, 18.0);
    assert_eq!(view.slots.len(), 3);
    assert_eq!(view.slots[2].slot, Slot::Defender1);
    assert_eq!(view.slots[2].score, 1.0);
    assert_eq!(view.roster.map(|r| r.updated_at), Some(T1));
    Ok(())
}

#[tokio::test]
async fn team_view_for_unknown_user_is_empty() -> Result<(), DomainError> {
    let view = team_view(&catalog(), &InMemoryRosterStore::new(), "nobody").await?;
    assert!(view.roster.is_none());
    assert!(view.slots.is_empty());
    assert_eq!(view.total, 0.0);
    Ok(())
}

#[tokio::test]
async fn broken_catalog_scores_zero() -> Result<(), DomainError> {
    let store = InMemoryRosterStore::new();
    assign_player(&store, "u1", "A", Position::Captain, T0).await?;

    let view = team_view(&BrokenCatalog, &store, "u1").await?;
    assert_eq!(view.total, 0.0);
    assert_eq!(view.slots.len(), 1);
    assert!(!view.slots[0].found);
    assert!(view.roster.is_some());
    Ok(())
}

#[tokio::test]
async fn score_roster_without_roster_skips_catalog() {
    let view = score_roster(&BrokenCatalog, None).await;
    assert!(view.roster.is_none());
    assert_eq!(view.total, 0.0);
}

#[tokio::test]
async fn capacity_rejection_writes_nothing() -> Result<(), DomainError> {
    let store = InMemoryRosterStore::new();
    assign_player(&store, "u1", "A", Position::Cutter, T0).await?;
    assign_player(&store, "u1", "B", Position::Cutter, T0).await?;
    let before = store.get_roster("u1").await?;

    let err = assign_player(&store, "u1", "C", Position::Cutter, T1)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::CapacityExceeded, _)
    ));
    assert_eq!(store.get_roster("u1").await?, before);
    Ok(())
}

#[tokio::test]
async fn eligibility_follows_stored_roster() -> Result<(), DomainError> {
    let store = InMemoryRosterStore::new();
    assert_eq!(
        eligible_positions(&store, "u1", "A").await?,
        Position::ALL.to_vec()
    );

    assign_player(&store, "u1", "A", Position::Captain, T0).await?;
    assert_eq!(
        eligible_positions(&store, "u1", "B").await?,
        vec![Position::Handler, Position::Cutter, Position::Defender]
    );
    // The captain may still move anywhere, including where it is
    assert_eq!(
        eligible_positions(&store, "u1", "A").await?,
        Position::ALL.to_vec()
    );
    Ok(())
}

#[tokio::test]
async fn remove_on_absent_roster_is_noop() -> Result<(), DomainError> {
    let store = InMemoryRosterStore::new();
    let result = remove_slot(&store, "u1", Slot::Captain, T0).await?;
    assert!(result.is_none());
    assert_eq!(store.len().await, 0);
    Ok(())
}

#[tokio::test]
async fn remove_clears_and_stamps() -> Result<(), DomainError> {
    let store = InMemoryRosterStore::new();
    assign_player(&store, "u1", "A", Position::Handler, T0).await?;
    assign_player(&store, "u1", "B", Position::Handler, T0).await?;

    let roster = remove_slot(&store, "u1", Slot::Handler1, T1)
        .await?
        .expect("roster exists");
    assert_eq!(roster.handler_1, None);
    assert_eq!(roster.handler_2.as_deref(), Some("B"));
    assert_eq!(roster.updated_at, T1);
    assert_eq!(roster.created_at, T0);
    Ok(())
}

#[tokio::test]
async fn sea_store_round_trips_rosters() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    seed_player(db, "A", "Flyers", [10.0, 3.0, 2.0, 1.0]).await?;
    seed_player(db, "B", "Storm", [4.0, 7.0, 5.0, 2.0]).await?;

    let store = SeaRosterStore::new(db);
    assign_player(&store, "u1", "A", Position::Captain, T0).await?;
    assign_player(&store, "u1", "B", Position::Handler, T1).await?;

    let stored: Roster = store.get_roster("u1").await?.expect("stored");
    assert_eq!(stored.captain.as_deref(), Some("A"));
    assert_eq!(stored.handler_1.as_deref(), Some("B"));
    assert_eq!(stored.created_at, T0);
    assert_eq!(stored.updated_at, T1);

    let view = team_view(&SeaPlayerCatalog::new(db), &store, "u1").await?;
    assert_eq!(view.total, 17.0);
    Ok(())
}

#[tokio::test]
async fn sea_store_keeps_one_row_per_user() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = require_db(&state)?;
    let store = SeaRosterStore::new(db);

    assign_player(&store, "u1", "A", Position::Captain, T0).await?;
    assign_player(&store, "u1", "A", Position::Defender, T1).await?;
    assign_player(&store, "u2", "A", Position::Captain, T1).await?;

    let u1 = store.get_roster("u1").await?.expect("u1");
    assert_eq!(u1.captain, None);
    assert_eq!(u1.defender_1.as_deref(), Some("A"));

    let u2 = store.get_roster("u2").await?.expect("u2");
    assert_eq!(u2.captain.as_deref(), Some("A"));
    Ok(())
}
