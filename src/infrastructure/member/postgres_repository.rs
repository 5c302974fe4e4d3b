//! PostgreSQL member repository implementation
//!
//! The search queries are rendered dynamically: a fixed projection over a
//! left outer join, plus a conjunction folded from the condition's filter
//! fragments. Absent filters contribute nothing, so an unconstrained
//! condition renders no WHERE clause at all.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder, Row};

use crate::domain::filter::{FilterField, FilterFragment, FilterOperator, FilterValue};
use crate::domain::member::{
    Member, MemberRepository, MemberSearchCondition, MemberTeamRow, NewMember,
};
use crate::domain::page::{Sort, SortDirection, SortField};
use crate::domain::DomainError;

const PROJECTION_SELECT: &str = "SELECT members.id AS member_id, members.username, members.age, \
     teams.id AS team_id, teams.name AS team_name \
     FROM members LEFT JOIN teams ON teams.id = members.team_id";

const COUNT_SELECT: &str =
    "SELECT COUNT(*) FROM members LEFT JOIN teams ON teams.id = members.team_id";

const MEMBER_COLUMNS: &str = "id, username, age, team_id, created_at";

/// PostgreSQL implementation of MemberRepository
#[derive(Debug, Clone)]
pub struct PostgresMemberRepository {
    pool: PgPool,
}

impl PostgresMemberRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Fold filter fragments into a WHERE conjunction.
///
/// Values are bound, never interpolated; columns and operators come from
/// fixed enums, so no client text reaches the SQL surface.
fn push_fragments(query: &mut QueryBuilder<'static, Postgres>, fragments: Vec<FilterFragment>) {
    let mut has_conditions = false;

    for fragment in fragments {
        if has_conditions {
            query.push(" AND ");
        } else {
            query.push(" WHERE ");
            has_conditions = true;
        }

        query.push(filter_column(fragment.field));
        query.push(" ");
        query.push(operator_sql(fragment.operator));
        query.push(" ");

        match fragment.value {
            FilterValue::Text(text) => {
                query.push_bind(text);
            }
            FilterValue::Int(n) => {
                query.push_bind(n);
            }
        }
    }
}

fn push_order_by(query: &mut QueryBuilder<'static, Postgres>, sort: &Sort) {
    query.push(" ORDER BY ");
    query.push(sort_column(sort.field));
    query.push(" ");
    query.push(direction_sql(sort.direction));
}

fn filter_column(field: FilterField) -> &'static str {
    match field {
        FilterField::Username => "members.username",
        FilterField::TeamName => "teams.name",
        FilterField::Age => "members.age",
    }
}

fn sort_column(field: SortField) -> &'static str {
    match field {
        SortField::MemberId => "members.id",
        SortField::Username => "members.username",
        SortField::Age => "members.age",
        SortField::TeamName => "teams.name",
    }
}

fn operator_sql(operator: FilterOperator) -> &'static str {
    match operator {
        FilterOperator::Eq => "=",
        FilterOperator::Goe => ">=",
        FilterOperator::Loe => "<=",
    }
}

fn direction_sql(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Asc => "ASC",
        SortDirection::Desc => "DESC",
    }
}

fn projection_query(condition: &MemberSearchCondition) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new(PROJECTION_SELECT);
    push_fragments(&mut query, condition.fragments());
    query
}

fn count_query(condition: &MemberSearchCondition) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new(COUNT_SELECT);
    push_fragments(&mut query, condition.fragments());
    query
}

fn row_to_projection(row: &sqlx::postgres::PgRow) -> MemberTeamRow {
    MemberTeamRow {
        member_id: row.get("member_id"),
        username: row.get("username"),
        age: row.get("age"),
        team_id: row.get("team_id"),
        team_name: row.get("team_name"),
    }
}

fn row_to_member(row: &sqlx::postgres::PgRow) -> Member {
    Member::new(
        row.get("id"),
        row.get("username"),
        row.get("age"),
        row.get("team_id"),
        row.get("created_at"),
    )
}

fn map_write_error(e: sqlx::Error, team_id: Option<i64>, context: &str) -> DomainError {
    let msg = e.to_string();

    if msg.contains("foreign key") {
        if let Some(team_id) = team_id {
            return DomainError::not_found(format!("Team '{}' not found", team_id));
        }
    }

    DomainError::storage(format!("{}: {}", context, e))
}

#[async_trait]
impl MemberRepository for PostgresMemberRepository {
    async fn insert(&self, new_member: NewMember) -> Result<Member, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO members (username, age, team_id)
            VALUES ($1, $2, $3)
            RETURNING id, username, age, team_id, created_at
            "#,
        )
        .bind(&new_member.username)
        .bind(new_member.age)
        .bind(new_member.team_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, new_member.team_id, "Failed to insert member"))?;

        Ok(row_to_member(&row))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Member>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM members WHERE id = $1",
            MEMBER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get member: {}", e)))?;

        Ok(row.as_ref().map(row_to_member))
    }

    async fn find_all(&self) -> Result<Vec<Member>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM members ORDER BY id",
            MEMBER_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list members: {}", e)))?;

        Ok(rows.iter().map(row_to_member).collect())
    }

    async fn find_by_username(&self, username: &str) -> Result<Vec<Member>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM members WHERE username = $1 ORDER BY id",
            MEMBER_COLUMNS
        ))
        .bind(username)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::storage(format!("Failed to get members by username: {}", e))
        })?;

        Ok(rows.iter().map(row_to_member).collect())
    }

    async fn change_team(&self, member_id: i64, team_id: Option<i64>) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE members SET team_id = $2 WHERE id = $1")
            .bind(member_id)
            .bind(team_id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_write_error(e, team_id, "Failed to change team"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!(
                "Member '{}' not found",
                member_id
            )));
        }

        Ok(())
    }

    async fn search(
        &self,
        condition: &MemberSearchCondition,
        sort: &Sort,
    ) -> Result<Vec<MemberTeamRow>, DomainError> {
        let mut query = projection_query(condition);
        push_order_by(&mut query, sort);

        let rows = query
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to search members: {}", e)))?;

        Ok(rows.iter().map(row_to_projection).collect())
    }

    async fn search_slice(
        &self,
        condition: &MemberSearchCondition,
        sort: &Sort,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<MemberTeamRow>, DomainError> {
        let mut query = projection_query(condition);
        push_order_by(&mut query, sort);
        query.push(" LIMIT ");
        query.push_bind(limit);
        query.push(" OFFSET ");
        query.push_bind(offset);

        let rows = query
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to search member page: {}", e)))?;

        Ok(rows.iter().map(row_to_projection).collect())
    }

    async fn count(&self, condition: &MemberSearchCondition) -> Result<u64, DomainError> {
        let mut query = count_query(condition);

        let count: i64 = query
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to count members: {}", e)))?;

        Ok(count as u64)
    }
}
