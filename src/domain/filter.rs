//! Typed filter fragments for dynamic member search queries
//!
//! A search condition is lowered to a list of fragments, one per present
//! filter. The list is folded into a SQL conjunction by the Postgres
//! repository and evaluated directly against projection rows by the
//! in-memory mock. An absent filter simply produces no fragment, so the
//! empty list matches every row.

use serde::{Deserialize, Serialize};

use crate::domain::member::MemberTeamRow;

/// Column a fragment constrains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterField {
    Username,
    TeamName,
    Age,
}

/// Comparison operators for filter fragments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOperator {
    /// Equal to
    Eq,
    /// Greater than or equal to
    Goe,
    /// Less than or equal to
    Loe,
}

impl std::fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Eq => write!(f, "="),
            Self::Goe => write!(f, ">="),
            Self::Loe => write!(f, "<="),
        }
    }
}

/// Filter value bound to a fragment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// Text value
    Text(String),
    /// Integer value
    Int(i64),
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i32> for FilterValue {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<i64> for FilterValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

/// A single filter condition: `{field, operator, value}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterFragment {
    pub field: FilterField,
    pub operator: FilterOperator,
    pub value: FilterValue,
}

impl FilterFragment {
    /// Create a new fragment
    pub fn new(field: FilterField, operator: FilterOperator, value: FilterValue) -> Self {
        Self {
            field,
            operator,
            value,
        }
    }

    /// Create an equality fragment
    pub fn eq(field: FilterField, value: impl Into<FilterValue>) -> Self {
        Self::new(field, FilterOperator::Eq, value.into())
    }

    /// Create a greater-than-or-equal fragment
    pub fn goe(field: FilterField, value: impl Into<FilterValue>) -> Self {
        Self::new(field, FilterOperator::Goe, value.into())
    }

    /// Create a less-than-or-equal fragment
    pub fn loe(field: FilterField, value: impl Into<FilterValue>) -> Self {
        Self::new(field, FilterOperator::Loe, value.into())
    }

    /// Evaluate this fragment against a projection row.
    ///
    /// A null username or team name never satisfies an equality fragment
    /// on that field; the fragment constrains, it does not match absence.
    pub fn matches(&self, row: &MemberTeamRow) -> bool {
        match self.field {
            FilterField::Username => self.matches_text(row.username.as_deref()),
            FilterField::TeamName => self.matches_text(row.team_name.as_deref()),
            FilterField::Age => self.matches_int(i64::from(row.age)),
        }
    }

    fn matches_text(&self, actual: Option<&str>) -> bool {
        let FilterValue::Text(expected) = &self.value else {
            return false;
        };

        match self.operator {
            FilterOperator::Eq => actual == Some(expected.as_str()),
            // Range operators are never produced for text fields.
            FilterOperator::Goe | FilterOperator::Loe => false,
        }
    }

    fn matches_int(&self, actual: i64) -> bool {
        let FilterValue::Int(expected) = &self.value else {
            return false;
        };

        match self.operator {
            FilterOperator::Eq => actual == *expected,
            FilterOperator::Goe => actual >= *expected,
            FilterOperator::Loe => actual <= *expected,
        }
    }
}

/// Conjunction over a fragment list; the empty list matches every row.
pub fn matches_all(fragments: &[FilterFragment], row: &MemberTeamRow) -> bool {
    fragments.iter().all(|fragment| fragment.matches(row))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(username: Option<&str>, age: i32, team_name: Option<&str>) -> MemberTeamRow {
        MemberTeamRow {
            member_id: 1,
            username: username.map(String::from),
            age,
            team_id: team_name.map(|_| 1),
            team_name: team_name.map(String::from),
        }
    }

    #[test]
    fn test_username_eq() {
        let fragment = FilterFragment::eq(FilterField::Username, "member1");

        assert!(fragment.matches(&row(Some("member1"), 10, None)));
        assert!(!fragment.matches(&row(Some("member2"), 10, None)));
    }

    #[test]
    fn test_eq_does_not_match_null() {
        let fragment = FilterFragment::eq(FilterField::Username, "member1");
        assert!(!fragment.matches(&row(None, 10, None)));

        let fragment = FilterFragment::eq(FilterField::TeamName, "teamA");
        assert!(!fragment.matches(&row(Some("member1"), 10, None)));
    }

    #[test]
    fn test_team_name_eq_is_case_sensitive() {
        let fragment = FilterFragment::eq(FilterField::TeamName, "teamB");

        assert!(fragment.matches(&row(None, 10, Some("teamB"))));
        assert!(!fragment.matches(&row(None, 10, Some("TEAMB"))));
    }

    #[test]
    fn test_age_bounds_are_inclusive() {
        let goe = FilterFragment::goe(FilterField::Age, 20);
        let loe = FilterFragment::loe(FilterField::Age, 30);

        assert!(goe.matches(&row(None, 20, None)));
        assert!(!goe.matches(&row(None, 19, None)));
        assert!(loe.matches(&row(None, 30, None)));
        assert!(!loe.matches(&row(None, 31, None)));
    }

    #[test]
    fn test_empty_conjunction_matches_everything() {
        assert!(matches_all(&[], &row(None, 0, None)));
        assert!(matches_all(&[], &row(Some("anyone"), 99, Some("anywhere"))));
    }

    #[test]
    fn test_conjunction_is_commutative() {
        let a = FilterFragment::goe(FilterField::Age, 20);
        let b = FilterFragment::loe(FilterField::Age, 30);
        let target = row(None, 25, None);

        assert_eq!(
            matches_all(&[a.clone(), b.clone()], &target),
            matches_all(&[b, a], &target)
        );
    }

    #[test]
    fn test_contradictory_bounds_match_nothing() {
        let fragments = vec![
            FilterFragment::goe(FilterField::Age, 40),
            FilterFragment::loe(FilterField::Age, 10),
        ];

        for age in [0, 10, 25, 40, 100] {
            assert!(!matches_all(&fragments, &row(None, age, None)));
        }
    }

    #[test]
    fn test_operator_display() {
        assert_eq!(FilterOperator::Eq.to_string(), "=");
        assert_eq!(FilterOperator::Goe.to_string(), ">=");
        assert_eq!(FilterOperator::Loe.to_string(), "<=");
    }

    #[test]
    fn test_filter_value_conversions() {
        let text: FilterValue = "teamA".into();
        assert!(matches!(text, FilterValue::Text(_)));

        let int: FilterValue = 42i32.into();
        assert!(matches!(int, FilterValue::Int(42)));
    }
}
