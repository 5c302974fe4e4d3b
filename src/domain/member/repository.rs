//! Member repository trait

use async_trait::async_trait;

use super::{Member, MemberSearchCondition, MemberTeamRow, NewMember};
use crate::domain::page::Sort;
use crate::domain::DomainError;

/// Repository for member persistence and the member/team search queries.
///
/// Implementations receive an explicit connection handle at construction;
/// there is no process-wide session object.
#[async_trait]
pub trait MemberRepository: Send + Sync + std::fmt::Debug {
    /// Insert a new member
    async fn insert(&self, new_member: NewMember) -> Result<Member, DomainError>;

    /// Fetch a member by id
    async fn find_by_id(&self, id: i64) -> Result<Option<Member>, DomainError>;

    /// Fetch all members in insertion order
    async fn find_all(&self) -> Result<Vec<Member>, DomainError>;

    /// Fetch members with an exact username
    async fn find_by_username(&self, username: &str) -> Result<Vec<Member>, DomainError>;

    /// Persist a team reassignment (or clear it with `None`)
    async fn change_team(&self, member_id: i64, team_id: Option<i64>) -> Result<(), DomainError>;

    /// Unpaged projection fetch with the composed predicate applied
    async fn search(
        &self,
        condition: &MemberSearchCondition,
        sort: &Sort,
    ) -> Result<Vec<MemberTeamRow>, DomainError>;

    /// Offset/limit projection fetch with the composed predicate applied
    async fn search_slice(
        &self,
        condition: &MemberSearchCondition,
        sort: &Sort,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<MemberTeamRow>, DomainError>;

    /// Count matching rows with the same predicate and the same join
    async fn count(&self, condition: &MemberSearchCondition) -> Result<u64, DomainError>;
}
