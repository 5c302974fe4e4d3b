//! Member search endpoints
//!
//! Three variants over the same composed predicate and the same left outer
//! join: /v1 returns an unpaged list, /v2 pages with an unconditional count
//! query, /v3 pages with the last-page count skip.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use validator::Validate;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::member::{MemberSearchCondition, MemberTeamRow};
use crate::domain::page::{Page, PageRequest, Sort};

/// Search filters bound from the query string
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberSearchParams {
    pub username: Option<String>,
    pub team_name: Option<String>,
    pub age_goe: Option<i32>,
    pub age_loe: Option<i32>,
    pub sort: Option<String>,
}

impl MemberSearchParams {
    fn condition(&self) -> MemberSearchCondition {
        MemberSearchCondition::from_parts(
            self.username.clone(),
            self.team_name.clone(),
            self.age_goe,
            self.age_loe,
        )
    }

    fn sort(&self) -> Result<Sort, ApiError> {
        match self.sort.as_deref().map(str::trim) {
            None | Some("") => Ok(Sort::default()),
            Some(text) => Sort::parse(text)
                .map_err(|e| ApiError::from(e).with_param("sort")),
        }
    }
}

/// Page request bound from the query string
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PageParams {
    #[serde(default)]
    pub page: u32,
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, max = 1000, message = "must be between 1 and 1000"))]
    pub size: u32,
}

fn default_page_size() -> u32 {
    20
}

impl PageParams {
    fn page_request(&self) -> Result<PageRequest, ApiError> {
        self.validate()
            .map_err(|e| ApiError::bad_request(e.to_string()).with_param("size"))?;

        PageRequest::new(self.page, self.size).map_err(ApiError::from)
    }
}

/// Projection response matching the flattened member/team row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberTeamResponse {
    pub member_id: i64,
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<i64>,
    pub team_name: Option<String>,
}

impl From<MemberTeamRow> for MemberTeamResponse {
    fn from(row: MemberTeamRow) -> Self {
        Self {
            member_id: row.member_id,
            username: row.username,
            age: row.age,
            team_id: row.team_id,
            team_name: row.team_name,
        }
    }
}

/// GET /v1/members - unpaged search
pub async fn search_members_v1(
    State(state): State<AppState>,
    Query(params): Query<MemberSearchParams>,
) -> Result<Json<Vec<MemberTeamResponse>>, ApiError> {
    debug!(?params, "Unpaged member search");

    let condition = params.condition();
    let sort = params.sort()?;

    let rows = state
        .member_service
        .search(&condition, &sort)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(rows.into_iter().map(MemberTeamResponse::from).collect()))
}

/// GET /v2/members - paged search with an unconditional count query
pub async fn search_members_v2(
    State(state): State<AppState>,
    Query(params): Query<MemberSearchParams>,
    Query(page_params): Query<PageParams>,
) -> Result<Json<Page<MemberTeamResponse>>, ApiError> {
    debug!(?params, ?page_params, "Paged member search");

    let condition = params.condition();
    let sort = params.sort()?;
    let request = page_params.page_request()?;

    let page = state
        .member_service
        .search_page(&condition, &sort, &request)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(page.map(MemberTeamResponse::from)))
}

/// GET /v3/members - paged search with the last-page count skip
pub async fn search_members_v3(
    State(state): State<AppState>,
    Query(params): Query<MemberSearchParams>,
    Query(page_params): Query<PageParams>,
) -> Result<Json<Page<MemberTeamResponse>>, ApiError> {
    debug!(?params, ?page_params, "Paged member search (count skip)");

    let condition = params.condition();
    let sort = params.sort()?;
    let request = page_params.page_request()?;

    let page = state
        .member_service
        .search_page_optimized(&condition, &sort, &request)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(page.map(MemberTeamResponse::from)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    use super::*;
    use crate::api::router::create_router_with_state;
    use crate::domain::member::repository::mock::MockMemberRepository;
    use crate::domain::member::repository::MemberRepository;
    use crate::domain::member::NewMember;
    use crate::infrastructure::member::MemberSearchService;

    async fn seeded_state() -> (Arc<MockMemberRepository>, AppState) {
        let repo = Arc::new(MockMemberRepository::new());
        repo.add_team(1, "teamA");
        repo.add_team(2, "teamB");

        for (username, age, team_id) in [
            ("member1", 10, 1),
            ("member2", 20, 1),
            ("member3", 30, 2),
            ("member4", 40, 2),
        ] {
            repo.insert(NewMember::new(username, age).with_team(team_id))
                .await
                .unwrap();
        }

        let member_service = Arc::new(MemberSearchService::new(repo.clone()));
        // Lazy pool: never connected, member endpoints do not touch it.
        let pg_pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/unused")
            .unwrap();

        (
            repo,
            AppState {
                member_service,
                pg_pool,
            },
        )
    }

    async fn get(state: AppState, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = create_router_with_state(state)
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_v1_returns_all_rows() {
        let (_, state) = seeded_state().await;

        let (status, body) = get(state, "/v1/members").await;
        assert_eq!(status, StatusCode::OK);

        let rows: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(rows.as_array().unwrap().len(), 4);
        assert_eq!(rows[0]["memberId"], 1);
        assert_eq!(rows[0]["username"], "member1");
        assert_eq!(rows[0]["age"], 10);
        assert_eq!(rows[0]["teamName"], "teamA");
    }

    #[tokio::test]
    async fn test_v1_filters_by_team_name() {
        let (_, state) = seeded_state().await;

        let (status, body) = get(state, "/v1/members?teamName=teamB").await;
        assert_eq!(status, StatusCode::OK);

        let rows: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let rows = rows.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row["teamName"] == "teamB"));
    }

    #[tokio::test]
    async fn test_v1_blank_filter_equals_absent() {
        let (_, state) = seeded_state().await;

        let (_, with_blank) = get(state.clone(), "/v1/members?username=&ageGoe=20").await;
        let (_, without) = get(state, "/v1/members?ageGoe=20").await;

        assert_eq!(with_blank, without);
    }

    #[tokio::test]
    async fn test_v1_age_range() {
        let (_, state) = seeded_state().await;

        let (status, body) = get(state, "/v1/members?ageGoe=20&ageLoe=30").await;
        assert_eq!(status, StatusCode::OK);

        let rows: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let ages: Vec<i64> = rows
            .as_array()
            .unwrap()
            .iter()
            .map(|row| row["age"].as_i64().unwrap())
            .collect();
        assert_eq!(ages, vec![20, 30]);
    }

    #[tokio::test]
    async fn test_v1_malformed_age_is_client_error() {
        let (_, state) = seeded_state().await;

        let (status, _) = get(state, "/v1/members?ageGoe=abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_v1_unknown_sort_field_is_client_error() {
        let (_, state) = seeded_state().await;

        let (status, body) = get(state, "/v1/members?sort=password").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(error["error"]["type"], "invalid_request_error");
        assert_eq!(error["error"]["param"], "sort");
    }

    #[tokio::test]
    async fn test_v2_page_envelope() {
        let (_, state) = seeded_state().await;

        let (status, body) = get(state, "/v2/members?page=0&size=3").await;
        assert_eq!(status, StatusCode::OK);

        let page: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(page["content"].as_array().unwrap().len(), 3);
        assert_eq!(page["page"], 0);
        assert_eq!(page["size"], 3);
        assert_eq!(page["totalElements"], 4);
        assert_eq!(page["totalPages"], 2);
    }

    #[tokio::test]
    async fn test_v2_second_page() {
        let (_, state) = seeded_state().await;

        let (_, body) = get(state, "/v2/members?page=1&size=3").await;

        let page: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let content = page["content"].as_array().unwrap();
        assert_eq!(content.len(), 1);
        assert_eq!(content[0]["username"], "member4");
        assert_eq!(page["totalElements"], 4);
    }

    #[tokio::test]
    async fn test_v2_rejects_zero_size() {
        let (_, state) = seeded_state().await;

        let (status, body) = get(state, "/v2/members?page=0&size=0").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let error: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(error["error"]["type"], "invalid_request_error");
    }

    #[tokio::test]
    async fn test_v3_matches_v2() {
        let (_, state) = seeded_state().await;

        for uri_suffix in [
            "page=0&size=3",
            "page=1&size=3",
            "page=0&size=10",
            "teamName=teamA&page=0&size=1",
            "ageGoe=20&ageLoe=30&page=0&size=5",
        ] {
            let (_, v2) = get(state.clone(), &format!("/v2/members?{}", uri_suffix)).await;
            let (_, v3) = get(state.clone(), &format!("/v3/members?{}", uri_suffix)).await;

            assert_eq!(v2, v3, "variants disagree for {}", uri_suffix);
        }
    }

    #[tokio::test]
    async fn test_v3_skips_count_on_short_first_page() {
        let (repo, state) = seeded_state().await;

        let (status, body) = get(state, "/v3/members?page=0&size=10").await;
        assert_eq!(status, StatusCode::OK);

        let page: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(page["totalElements"], 4);
        assert_eq!(repo.count_queries(), 0);
    }

    #[tokio::test]
    async fn test_v3_counts_on_later_pages() {
        let (repo, state) = seeded_state().await;

        let (_, _) = get(state, "/v3/members?page=1&size=3").await;
        assert_eq!(repo.count_queries(), 1);
    }

    #[tokio::test]
    async fn test_repeated_request_is_byte_identical() {
        let (_, state) = seeded_state().await;
        let uri = "/v2/members?teamName=teamB&ageGoe=10&page=0&size=2";

        let (_, first) = get(state.clone(), uri).await;
        let (_, second) = get(state, uri).await;

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_empty_result_is_ok_not_error() {
        let (_, state) = seeded_state().await;

        let (status, body) = get(state, "/v1/members?username=nobody").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"[]");
    }

    #[tokio::test]
    async fn test_page_beyond_total_is_valid_and_empty() {
        let (_, state) = seeded_state().await;

        let (status, body) = get(state, "/v3/members?page=9&size=10").await;
        assert_eq!(status, StatusCode::OK);

        let page: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(page["content"].as_array().unwrap().is_empty());
        assert_eq!(page["totalElements"], 4);
    }

    #[tokio::test]
    async fn test_sort_by_age_desc() {
        let (_, state) = seeded_state().await;

        let (_, body) = get(state, "/v1/members?sort=age,desc").await;

        let rows: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let ages: Vec<i64> = rows
            .as_array()
            .unwrap()
            .iter()
            .map(|row| row["age"].as_i64().unwrap())
            .collect();
        assert_eq!(ages, vec![40, 30, 20, 10]);
    }
}
