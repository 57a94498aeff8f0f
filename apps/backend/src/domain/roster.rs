use time::OffsetDateTime;

use super::position::{Position, Slot};

/// A user's team: seven optional slots keyed by `user_id`.
///
/// Slots hold player names. Rosters produced by `assign`/`remove` never hold
/// the same player twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    pub user_id: String,
    pub captain: Option<String>,
    pub handler_1: Option<String>,
    pub handler_2: Option<String>,
    pub cutter_1: Option<String>,
    pub cutter_2: Option<String>,
    pub defender_1: Option<String>,
    pub defender_2: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl Roster {
    /// All slots empty; the starting point for a user's first assignment.
    pub fn empty(user_id: impl Into<String>, now: OffsetDateTime) -> Self {
        Self {
            user_id: user_id.into(),
            captain: None,
            handler_1: None,
            handler_2: None,
            cutter_1: None,
            cutter_2: None,
            defender_1: None,
            defender_2: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn get(&self, slot: Slot) -> Option<&str> {
        self.slot_ref(slot).as_deref()
    }

    pub fn set(&mut self, slot: Slot, player: Option<String>) {
        *self.slot_mut(slot) = player;
    }

    /// Builder-style `set`, convenient for fixtures.
    pub fn with(mut self, slot: Slot, player: &str) -> Self {
        self.set(slot, Some(player.to_string()));
        self
    }

    /// Occupied slots in canonical slot order.
    pub fn occupied(&self) -> impl Iterator<Item = (Slot, &str)> + '_ {
        Slot::ALL
            .into_iter()
            .filter_map(move |slot| self.get(slot).map(|player| (slot, player)))
    }

    /// Slots currently holding `player`.
    pub fn slots_of<'a>(&'a self, player: &'a str) -> impl Iterator<Item = Slot> + 'a {
        self.occupied()
            .filter(move |(_, occupant)| *occupant == player)
            .map(|(slot, _)| slot)
    }

    pub fn holds(&self, player: &str) -> bool {
        self.slots_of(player).next().is_some()
    }

    /// Number of occupied slots in `position`.
    pub fn filled(&self, position: Position) -> usize {
        position
            .slots()
            .iter()
            .filter(|slot| self.get(**slot).is_some())
            .count()
    }

    /// Slot contents equal, timestamps ignored.
    pub fn same_slots(&self, other: &Roster) -> bool {
        self.user_id == other.user_id && Slot::ALL.iter().all(|s| self.get(*s) == other.get(*s))
    }

    fn slot_ref(&self, slot: Slot) -> &Option<String> {
        match slot {
            Slot::Captain => &self.captain,
            Slot::Handler1 => &self.handler_1,
            Slot::Handler2 => &self.handler_2,
            Slot::Cutter1 => &self.cutter_1,
            Slot::Cutter2 => &self.cutter_2,
            Slot::Defender1 => &self.defender_1,
            Slot::Defender2 => &self.defender_2,
        }
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut Option<String> {
        match slot {
            Slot::Captain => &mut self.captain,
            Slot::Handler1 => &mut self.handler_1,
            Slot::Handler2 => &mut self.handler_2,
            Slot::Cutter1 => &mut self.cutter_1,
            Slot::Cutter2 => &mut self.cutter_2,
            Slot::Defender1 => &mut self.defender_1,
            Slot::Defender2 => &mut self.defender_2,
        }
    }
}
