//! Team repository trait

use async_trait::async_trait;

use super::Team;
use crate::domain::DomainError;

/// Repository for team persistence
#[async_trait]
pub trait TeamRepository: Send + Sync + std::fmt::Debug {
    /// Insert a new team
    async fn create(&self, name: &str) -> Result<Team, DomainError>;

    /// Fetch a team by id
    async fn get(&self, id: i64) -> Result<Option<Team>, DomainError>;

    /// Fetch a team by exact name
    async fn find_by_name(&self, name: &str) -> Result<Option<Team>, DomainError>;

    /// Fetch all teams in insertion order
    async fn list(&self) -> Result<Vec<Team>, DomainError>;
}
