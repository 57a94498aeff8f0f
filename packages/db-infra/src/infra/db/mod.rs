pub mod core;

pub use core::{
    bootstrap_db, build_pool, orchestrate_migration, orchestrate_migration_internal,
    sanitize_db_url,
};
