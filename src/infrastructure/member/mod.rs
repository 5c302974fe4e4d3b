//! Member infrastructure - Postgres repository and search service

mod postgres_repository;
mod service;

pub use postgres_repository::PostgresMemberRepository;
pub use service::MemberSearchService;
