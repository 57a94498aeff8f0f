//! Infrastructure layer - database error translation and state assembly.

pub mod db_errors;
pub mod state;
