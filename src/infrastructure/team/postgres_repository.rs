//! PostgreSQL team repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::team::{Team, TeamRepository};
use crate::domain::DomainError;

/// PostgreSQL implementation of TeamRepository
#[derive(Debug, Clone)]
pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_team(row: &sqlx::postgres::PgRow) -> Team {
    Team::new(row.get("id"), row.get::<String, _>("name"), row.get("created_at"))
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn create(&self, name: &str) -> Result<Team, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO teams (name)
            VALUES ($1)
            RETURNING id, name, created_at
            "#,
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create team: {}", e)))?;

        Ok(row_to_team(&row))
    }

    async fn get(&self, id: i64) -> Result<Option<Team>, DomainError> {
        let row = sqlx::query("SELECT id, name, created_at FROM teams WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to get team: {}", e)))?;

        Ok(row.as_ref().map(row_to_team))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Team>, DomainError> {
        let row = sqlx::query(
            "SELECT id, name, created_at FROM teams WHERE name = $1 ORDER BY id LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get team by name: {}", e)))?;

        Ok(row.as_ref().map(row_to_team))
    }

    async fn list(&self) -> Result<Vec<Team>, DomainError> {
        let rows = sqlx::query("SELECT id, name, created_at FROM teams ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to list teams: {}", e)))?;

        Ok(rows.iter().map(row_to_team).collect())
    }
}
