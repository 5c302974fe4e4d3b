//! Member domain module
//!
//! Members are the searchable unit. A member may belong to at most one team
//! through an explicit foreign key; team membership is derived by joining at
//! query time, never stored as an in-memory collection.

mod entity;
mod projection;
pub mod repository;
mod search;

pub use entity::{Member, NewMember};
pub use projection::MemberTeamRow;
pub use repository::MemberRepository;
pub use search::MemberSearchCondition;
