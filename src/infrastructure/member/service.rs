//! Member search service - the three query variants
//!
//! All variants apply the same composed predicate over the same left outer
//! join; they differ only in slicing and count strategy. Content and count
//! are separate statements, so the two snapshots may diverge under
//! concurrent writes; pagination here is eventually consistent.

use std::sync::Arc;

use tracing::debug;

use crate::domain::member::{MemberRepository, MemberSearchCondition, MemberTeamRow};
use crate::domain::page::{Page, PageRequest, Sort};
use crate::domain::DomainError;

/// Read-side service executing the member/team search variants
#[derive(Debug)]
pub struct MemberSearchService<R: MemberRepository> {
    repository: Arc<R>,
}

impl<R: MemberRepository> MemberSearchService<R> {
    /// Create a new search service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Unpaged search returning every matching projection row
    pub async fn search(
        &self,
        condition: &MemberSearchCondition,
        sort: &Sort,
    ) -> Result<Vec<MemberTeamRow>, DomainError> {
        debug!(?condition, "Unpaged member search");
        self.repository.search(condition, sort).await
    }

    /// Paged search that always issues the count query alongside the slice
    pub async fn search_page(
        &self,
        condition: &MemberSearchCondition,
        sort: &Sort,
        request: &PageRequest,
    ) -> Result<Page<MemberTeamRow>, DomainError> {
        debug!(?condition, page = request.page(), size = request.size(), "Paged member search");

        let content = self
            .repository
            .search_slice(condition, sort, request.limit(), request.offset())
            .await?;
        let total = self.repository.count(condition).await?;

        Ok(Page::new(content, request, total))
    }

    /// Paged search that skips the count query when the first page is also
    /// the last: with no offset and fewer rows than requested, the content
    /// size is the total. Every other case issues the count query with the
    /// same predicate and the same join.
    pub async fn search_page_optimized(
        &self,
        condition: &MemberSearchCondition,
        sort: &Sort,
        request: &PageRequest,
    ) -> Result<Page<MemberTeamRow>, DomainError> {
        debug!(?condition, page = request.page(), size = request.size(), "Paged member search (count skip)");

        let content = self
            .repository
            .search_slice(condition, sort, request.limit(), request.offset())
            .await?;

        let total = if request.offset() == 0 && (content.len() as i64) < request.limit() {
            content.len() as u64
        } else {
            self.repository.count(condition).await?
        };

        Ok(Page::new(content, request, total))
    }
}
