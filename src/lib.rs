//! Member Search API
//!
//! A tutorial-style backend service demonstrating dynamic, type-safe query
//! construction over a relational Member/Team schema:
//! - optional search filters lowered to typed filter fragments
//! - a conjunction folded over the present fragments only
//! - three query variants: unpaged, paged with count, paged with count skip

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

use api::state::AppState;
use infrastructure::member::{MemberSearchService, PostgresMemberRepository};

/// Create the application state with all services initialized
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let pg_pool = connect_pool(config).await?;

    let member_repository = Arc::new(PostgresMemberRepository::new(pg_pool.clone()));
    let member_service = Arc::new(MemberSearchService::new(member_repository));

    Ok(AppState {
        member_service,
        pg_pool,
    })
}

/// Connect the Postgres pool from `DATABASE_URL`
pub async fn connect_pool(config: &AppConfig) -> anyhow::Result<PgPool> {
    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;

    info!("Connecting to PostgreSQL...");
    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&database_url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to connect to PostgreSQL: {}", e))?;
    info!("PostgreSQL connection established");

    Ok(pg_pool)
}
