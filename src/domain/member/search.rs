//! Member search condition
//!
//! An immutable bag of optional filters. Lowering to fragments applies the
//! absence rules: a missing value is no constraint, and blank text is the
//! same as a missing value.

use crate::domain::filter::{matches_all, FilterField, FilterFragment};
use crate::domain::member::MemberTeamRow;

/// Optional filters for the member/team search queries
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberSearchCondition {
    username: Option<String>,
    team_name: Option<String>,
    age_goe: Option<i32>,
    age_loe: Option<i32>,
}

impl MemberSearchCondition {
    /// Condition with no filters; matches every row
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a condition from raw optional inputs (e.g. bound query params)
    pub fn from_parts(
        username: Option<String>,
        team_name: Option<String>,
        age_goe: Option<i32>,
        age_loe: Option<i32>,
    ) -> Self {
        Self {
            username,
            team_name,
            age_goe,
            age_loe,
        }
    }

    /// Filter by exact username (builder pattern)
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Filter by exact team name (builder pattern)
    pub fn with_team_name(mut self, team_name: impl Into<String>) -> Self {
        self.team_name = Some(team_name.into());
        self
    }

    /// Filter by minimum age, inclusive (builder pattern)
    pub fn with_age_goe(mut self, age: i32) -> Self {
        self.age_goe = Some(age);
        self
    }

    /// Filter by maximum age, inclusive (builder pattern)
    pub fn with_age_loe(mut self, age: i32) -> Self {
        self.age_loe = Some(age);
        self
    }

    /// Username filter; blank text is treated as absent
    pub fn username(&self) -> Option<&str> {
        text_filter(&self.username)
    }

    /// Team name filter; blank text is treated as absent
    pub fn team_name(&self) -> Option<&str> {
        text_filter(&self.team_name)
    }

    /// Lower bound on age, inclusive
    pub fn age_goe(&self) -> Option<i32> {
        self.age_goe
    }

    /// Upper bound on age, inclusive
    pub fn age_loe(&self) -> Option<i32> {
        self.age_loe
    }

    /// Lower the condition to typed fragments, skipping absent filters.
    ///
    /// The fragment list is derived deterministically, so the same condition
    /// always composes the same predicate.
    pub fn fragments(&self) -> Vec<FilterFragment> {
        let mut fragments = Vec::with_capacity(4);

        if let Some(username) = self.username() {
            fragments.push(FilterFragment::eq(FilterField::Username, username));
        }

        if let Some(team_name) = self.team_name() {
            fragments.push(FilterFragment::eq(FilterField::TeamName, team_name));
        }

        if let Some(age_goe) = self.age_goe {
            fragments.push(FilterFragment::goe(FilterField::Age, age_goe));
        }

        if let Some(age_loe) = self.age_loe {
            fragments.push(FilterFragment::loe(FilterField::Age, age_loe));
        }

        fragments
    }

    /// Evaluate the composed predicate against a projection row
    pub fn matches(&self, row: &MemberTeamRow) -> bool {
        matches_all(&self.fragments(), row)
    }
}

fn text_filter(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|text| !text.trim().is_empty())
}
