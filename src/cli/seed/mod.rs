//! Seed command - loads the demo fixture
//!
//! Inserts teamA/teamB and four members, the data set used throughout the
//! search examples. Running it twice is a no-op.

use tracing::info;

use crate::config::AppConfig;
use crate::domain::member::{MemberRepository, NewMember};
use crate::domain::team::TeamRepository;
use crate::infrastructure::member::PostgresMemberRepository;
use crate::infrastructure::storage::run_migrations;
use crate::infrastructure::team::PostgresTeamRepository;

/// Load the fixture data
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    super::serve::init_logging(&config);

    let pool = crate::connect_pool(&config).await?;
    run_migrations(&pool).await?;

    let team_repository = PostgresTeamRepository::new(pool.clone());
    let member_repository = PostgresMemberRepository::new(pool);

    if team_repository.find_by_name("teamA").await?.is_some() {
        info!("Fixture already present, nothing to do");
        return Ok(());
    }

    let team_a = team_repository.create("teamA").await?;
    let team_b = team_repository.create("teamB").await?;

    for (username, age, team_id) in [
        ("member1", 10, team_a.id()),
        ("member2", 20, team_a.id()),
        ("member3", 30, team_b.id()),
        ("member4", 40, team_b.id()),
    ] {
        member_repository
            .insert(NewMember::new(username, age).with_team(team_id))
            .await?;
    }

    info!("Seeded 2 teams and 4 members");
    Ok(())
}
