use serde::Serialize;

use super::player::PlayerIndex;
use super::position::{Position, Slot};
use super::roster::Roster;

/// Contribution of one occupied slot to the team total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotScore {
    pub slot: Slot,
    pub position: Position,
    pub player: String,
    pub score: f64,
    /// False when the occupant is missing from the catalog (score is then 0).
    pub found: bool,
}

/// Per-slot breakdown for occupied slots, in canonical slot order.
pub fn slot_scores(roster: &Roster, index: &PlayerIndex) -> Vec<SlotScore> {
    roster
        .occupied()
        .map(|(slot, name)| {
            let position = slot.position();
            let player = index.get(name);
            SlotScore {
                slot,
                position,
                player: name.to_string(),
                score: player.map_or(0.0, |p| p.score_for(position)),
                found: player.is_some(),
            }
        })
        .collect()
}

/// Sum of each occupant's score for the position of the slot it sits in.
///
/// Occupants unknown to the catalog contribute 0.
pub fn total_score(roster: &Roster, index: &PlayerIndex) -> f64 {
    roster
        .occupied()
        .map(|(slot, name)| {
            index
                .get(name)
                .map_or(0.0, |p| p.score_for(slot.position()))
        })
        .sum()
}
