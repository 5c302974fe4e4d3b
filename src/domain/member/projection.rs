//! Flattened member/team projection

use serde::{Deserialize, Serialize};

/// Read-only row produced by the member/team search queries.
///
/// Built per result row from a left outer join; `team_id` and `team_name`
/// are null for members without a team. Equality is field-wise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberTeamRow {
    pub member_id: i64,
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<i64>,
    pub team_name: Option<String>,
}
