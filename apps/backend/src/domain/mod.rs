//! Domain layer: the roster assignment model.
//!
//! Everything here is synchronous and free of I/O. Callers fetch the roster
//! and catalog rows first and persist whatever comes back.

pub mod assignment;
pub mod eligibility;
pub mod fixtures;
pub mod player;
pub mod position;
pub mod removal;
pub mod roster;
pub mod scoring;

#[cfg(test)]
mod tests_props_roster;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use assignment::assign;
pub use eligibility::{eligible_positions, is_eligible};
pub use player::{validate_player_name, Player, PlayerIndex};
pub use position::{Position, Slot};
pub use removal::remove;
pub use roster::Roster;
pub use scoring::{slot_scores, total_score, SlotScore};
