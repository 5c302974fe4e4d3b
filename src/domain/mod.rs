//! Domain layer - Core entities and query composition logic

pub mod error;
pub mod filter;
pub mod member;
pub mod page;
pub mod team;

pub use error::DomainError;
pub use filter::{matches_all, FilterField, FilterFragment, FilterOperator, FilterValue};
pub use member::{Member, MemberRepository, MemberSearchCondition, MemberTeamRow, NewMember};
pub use page::{Page, PageRequest, Sort, SortDirection, SortField};
pub use team::{Team, TeamRepository};
