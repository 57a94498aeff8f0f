use super::position::Position;
use super::roster::Roster;

/// Positions `candidate` may be assigned to right now, in canonical order.
///
/// A position qualifies when the candidate already holds one of its slots or
/// when fewer than all of its slots are held by other players. With no roster
/// every position qualifies.
pub fn eligible_positions(roster: Option<&Roster>, candidate: &str) -> Vec<Position> {
    Position::ALL
        .into_iter()
        .filter(|position| match roster {
            Some(roster) => is_eligible(roster, candidate, *position),
            None => true,
        })
        .collect()
}

pub fn is_eligible(roster: &Roster, candidate: &str, position: Position) -> bool {
    let held_by_others = position
        .slots()
        .iter()
        .filter(|slot| matches!(roster.get(**slot), Some(occupant) if occupant != candidate))
        .count();
    held_by_others < position.capacity()
}
