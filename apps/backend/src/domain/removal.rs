use time::OffsetDateTime;

use super::position::Slot;
use super::roster::Roster;

/// Clear `slot`. Clearing an empty slot only refreshes `updated_at`.
///
/// Callers holding a position and optional index get the slot from
/// [`Slot::resolve`].
pub fn remove(roster: &Roster, slot: Slot, now: OffsetDateTime) -> Roster {
    let mut next = roster.clone();
    next.set(slot, None);
    next.updated_at = now;
    next
}
