//! Catalog fixtures shared by unit and integration tests.

use time::OffsetDateTime;

use super::player::Player;

/// Build a catalog player with explicit per-position scores
/// (captain, handler, cutter, defender). Other stats are zeroed.
pub fn scored_player(name: &str, team: &str, scores: [f64; 4]) -> Player {
    let [captain_score, handler_score, cutter_score, defender_score] = scores;
    Player {
        name: name.to_string(),
        team: team.to_string(),
        tournament_name: "Nationals".to_string(),
        price: 10.0,
        games_played: 0,
        assists: 0,
        goals: 0,
        ds: 0,
        turnovers: 0,
        captain_score,
        handler_score,
        cutter_score,
        defender_score,
        questionable: false,
        tournaments: None,
        games: None,
        updated_at: OffsetDateTime::UNIX_EPOCH,
    }
}
