use std::collections::HashMap;

use time::OffsetDateTime;

use super::position::Position;
use crate::errors::domain::{DomainError, ValidationKind};

/// A catalog entry with precomputed per-position scores.
///
/// Players are identified by `name`.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub name: String,
    pub team: String,
    pub tournament_name: String,
    pub price: f64,
    pub games_played: i32,
    pub assists: i32,
    pub goals: i32,
    pub ds: i32,
    pub turnovers: i32,
    pub captain_score: f64,
    pub handler_score: f64,
    pub cutter_score: f64,
    pub defender_score: f64,
    /// Advisory availability flag; never affects eligibility.
    pub questionable: bool,
    pub tournaments: Option<String>,
    pub games: Option<String>,
    pub updated_at: OffsetDateTime,
}

impl Player {
    pub fn score_for(&self, position: Position) -> f64 {
        match position {
            Position::Captain => self.captain_score,
            Position::Handler => self.handler_score,
            Position::Cutter => self.cutter_score,
            Position::Defender => self.defender_score,
        }
    }
}

/// Name-keyed lookup over catalog rows.
///
/// When two rows share a name the first one wins, so feed it catalog order.
#[derive(Debug, Clone, Default)]
pub struct PlayerIndex {
    by_name: HashMap<String, Player>,
}

impl PlayerIndex {
    pub fn new(players: impl IntoIterator<Item = Player>) -> Self {
        let mut by_name = HashMap::new();
        for player in players {
            by_name.entry(player.name.clone()).or_insert(player);
        }
        Self { by_name }
    }

    pub fn get(&self, name: &str) -> Option<&Player> {
        self.by_name.get(name)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl FromIterator<Player> for PlayerIndex {
    fn from_iter<I: IntoIterator<Item = Player>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Reject blank player names. The name itself is kept verbatim.
pub fn validate_player_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::validation(
            ValidationKind::InvalidPlayerName,
            "Player name must not be blank",
        ));
    }
    Ok(())
}
