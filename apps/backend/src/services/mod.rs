//! Use cases: load state through the repo traits, apply the roster model,
//! persist the result.

pub mod players;
pub mod team;
