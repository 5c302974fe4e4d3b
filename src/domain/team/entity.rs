//! Team entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Team entity backed by the `teams` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    /// Surrogate key, assigned by the database
    id: i64,
    /// Display name
    name: String,
    /// Creation timestamp
    created_at: DateTime<Utc>,
}

impl Team {
    /// Rehydrate a team from stored fields
    pub fn new(id: i64, name: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: name.into(),
            created_at,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_getters() {
        let team = Team::new(1, "teamA", Utc::now());

        assert_eq!(team.id(), 1);
        assert_eq!(team.name(), "teamA");
    }
}
