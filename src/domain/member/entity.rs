//! Member entity and insert payload

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Member entity backed by the `members` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// Surrogate key, assigned by the database
    id: i64,
    /// Display name, nullable
    username: Option<String>,
    age: i32,
    /// Foreign key to the member's team, nullable
    team_id: Option<i64>,
    /// Creation timestamp
    created_at: DateTime<Utc>,
}

impl Member {
    /// Rehydrate a member from stored fields
    pub fn new(
        id: i64,
        username: Option<String>,
        age: i32,
        team_id: Option<i64>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            username,
            age,
            team_id,
            created_at,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn team_id(&self) -> Option<i64> {
        self.team_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Reassign this member to another team, or clear the assignment.
    ///
    /// Only the owning foreign key moves. There is no inverse collection to
    /// maintain; the old and new teams' member lists are query-time joins.
    pub fn change_team(&mut self, team_id: Option<i64>) {
        self.team_id = team_id;
    }
}

/// Payload for inserting a new member
#[derive(Debug, Clone, Default)]
pub struct NewMember {
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<i64>,
}

impl NewMember {
    /// Create an insert payload with a username and age
    pub fn new(username: impl Into<String>, age: i32) -> Self {
        Self {
            username: Some(username.into()),
            age,
            team_id: None,
        }
    }

    /// Assign the new member to a team (builder pattern)
    pub fn with_team(mut self, team_id: i64) -> Self {
        self.team_id = Some(team_id);
        self
    }
}
