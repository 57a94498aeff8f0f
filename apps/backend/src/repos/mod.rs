//! Repository layer: domain-typed access to the player catalog and the
//! roster store, behind traits so services can run against SeaORM or memory.

pub mod memory;
pub mod players;
pub mod rosters;

pub use memory::{InMemoryCatalog, InMemoryRosterStore};
pub use players::{PlayerCatalog, SeaPlayerCatalog};
pub use rosters::{RosterStore, SeaRosterStore};
