pub mod players;
pub mod team;
