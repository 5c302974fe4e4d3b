//! Application state for shared services

use std::sync::Arc;

use sqlx::PgPool;

use crate::domain::member::{MemberRepository, MemberSearchCondition, MemberTeamRow};
use crate::domain::page::{Page, PageRequest, Sort};
use crate::domain::DomainError;
use crate::infrastructure::member::MemberSearchService;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub member_service: Arc<dyn MemberServiceTrait>,
    pub pg_pool: PgPool,
}

/// Trait for the member search variants exposed over HTTP
#[async_trait::async_trait]
pub trait MemberServiceTrait: Send + Sync {
    /// Unpaged search (Variant A)
    async fn search(
        &self,
        condition: &MemberSearchCondition,
        sort: &Sort,
    ) -> Result<Vec<MemberTeamRow>, DomainError>;

    /// Paged search with an unconditional count query (Variant B)
    async fn search_page(
        &self,
        condition: &MemberSearchCondition,
        sort: &Sort,
        request: &PageRequest,
    ) -> Result<Page<MemberTeamRow>, DomainError>;

    /// Paged search with the last-page count skip (Variant C)
    async fn search_page_optimized(
        &self,
        condition: &MemberSearchCondition,
        sort: &Sort,
        request: &PageRequest,
    ) -> Result<Page<MemberTeamRow>, DomainError>;
}

#[async_trait::async_trait]
impl<R: MemberRepository> MemberServiceTrait for MemberSearchService<R> {
    async fn search(
        &self,
        condition: &MemberSearchCondition,
        sort: &Sort,
    ) -> Result<Vec<MemberTeamRow>, DomainError> {
        MemberSearchService::search(self, condition, sort).await
    }

    async fn search_page(
        &self,
        condition: &MemberSearchCondition,
        sort: &Sort,
        request: &PageRequest,
    ) -> Result<Page<MemberTeamRow>, DomainError> {
        MemberSearchService::search_page(self, condition, sort, request).await
    }

    async fn search_page_optimized(
        &self,
        condition: &MemberSearchCondition,
        sort: &Sort,
        request: &PageRequest,
    ) -> Result<Page<MemberTeamRow>, DomainError> {
        MemberSearchService::search_page_optimized(self, condition, sort, request).await
    }
}
