//! Migrate command - applies pending database migrations

use tracing::info;

use crate::config::AppConfig;
use crate::infrastructure::storage::{run_migrations, PostgresMigrator};

/// Apply all pending migrations
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    super::serve::init_logging(&config);

    let pool = crate::connect_pool(&config).await?;
    run_migrations(&pool).await?;

    let version = PostgresMigrator::new(pool).current_version().await?;
    info!(?version, "Migrations applied");

    Ok(())
}
