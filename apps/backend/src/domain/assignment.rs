use time::OffsetDateTime;

use super::eligibility::is_eligible;
use super::position::{Position, Slot};
use super::roster::Roster;
use crate::errors::domain::{ConflictKind, DomainError};

/// Place `candidate` into `position`, vacating any slot it holds elsewhere.
///
/// Re-assigning a player to a position it already occupies keeps its slot.
/// Otherwise the first empty slot of the group is filled. A group whose slots
/// are all held by other players is rejected with `CapacityExceeded` and the
/// input is left untouched.
pub fn assign(
    roster: &Roster,
    candidate: &str,
    position: Position,
    now: OffsetDateTime,
) -> Result<Roster, DomainError> {
    if !is_eligible(roster, candidate, position) {
        return Err(capacity_exceeded(position));
    }

    let mut next = roster.clone();

    let elsewhere: Vec<Slot> = roster
        .slots_of(candidate)
        .filter(|slot| slot.position() != position)
        .collect();
    for slot in elsewhere {
        next.set(slot, None);
    }

    let already_placed = position
        .slots()
        .iter()
        .any(|slot| next.get(*slot) == Some(candidate));

    if !already_placed {
        let target = position
            .slots()
            .iter()
            .copied()
            .find(|slot| next.get(*slot).is_none())
            .ok_or_else(|| capacity_exceeded(position))?;
        next.set(target, Some(candidate.to_string()));
    }

    next.updated_at = now;
    Ok(next)
}

fn capacity_exceeded(position: Position) -> DomainError {
    DomainError::conflict(
        ConflictKind::CapacityExceeded,
        format!("All {position} slots are taken; remove a player first"),
    )
}
