use time::OffsetDateTime;

use crate::domain::fixtures::scored_player;
use crate::domain::{slot_scores, total_score, PlayerIndex, Position, Roster, Slot};

fn catalog() -> PlayerIndex {
    PlayerIndex::new([
        scored_player("A", "Flyers", [10.0, 1.0, 2.0, 3.0]),
        scored_player("B", "Flyers", [4.0, 7.0, 5.0, 6.0]),
        scored_player("C", "Storm", [8.0, 2.5, 9.25, 1.0]),
    ])
}

fn roster() -> Roster {
    Roster::empty("user-1", OffsetDateTime::UNIX_EPOCH)
}

#[test]
fn captain_plus_handler_sums_position_scores() {
    let r = roster().with(Slot::Captain, "A").with(Slot::Handler1, "B");
    assert_eq!(total_score(&r, &catalog()), 17.0);
}

#[test]
fn score_follows_the_slot_not_the_best_field() {
    // C's best score is cutter, but sitting at defender it earns the defender score
    let r = roster().with(Slot::Defender2, "C");
    assert_eq!(total_score(&r, &catalog()), 1.0);
}

#[test]
fn unknown_players_contribute_zero() {
    let r = roster()
        .with(Slot::Captain, "Ghost")
        .with(Slot::Cutter1, "C");
    assert_eq!(total_score(&r, &catalog()), 9.25);

    let breakdown = slot_scores(&r, &catalog());
    assert_eq!(breakdown.len(), 2);
    assert_eq!(breakdown[0].slot, Slot::Captain);
    assert!(!breakdown[0].found);
    assert_eq!(breakdown[0].score, 0.0);
    assert!(breakdown[1].found);
    assert_eq!(breakdown[1].position, Position::Cutter);
}

#[test]
fn empty_roster_and_empty_catalog_score_zero() {
    assert_eq!(total_score(&roster(), &catalog()), 0.0);
    let r = roster().with(Slot::Handler2, "A");
    assert_eq!(total_score(&r, &PlayerIndex::default()), 0.0);
}

#[test]
fn breakdown_total_matches_total_score() {
    let r = roster()
        .with(Slot::Captain, "A")
        .with(Slot::Handler2, "B")
        .with(Slot::Cutter1, "C");
    let sum: f64 = slot_scores(&r, &catalog()).iter().map(|s| s.score).sum();
    assert_eq!(sum, total_score(&r, &catalog()));
}

#[test]
fn first_duplicate_name_wins_in_index() {
    let index = PlayerIndex::new([
        scored_player("Sam", "Flyers", [1.0, 1.0, 1.0, 1.0]),
        scored_player("Sam", "Storm", [9.0, 9.0, 9.0, 9.0]),
    ]);
    assert_eq!(index.len(), 1);
    assert_eq!(index.get("Sam").map(|p| p.team.as_str()), Some("Flyers"));
}
