//! Storage infrastructure - database migrations

pub mod migrations;

pub use migrations::{run_migrations, Migration, PostgresMigrator};
