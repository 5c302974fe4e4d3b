//! Team infrastructure - Postgres repository

mod postgres_repository;

pub use postgres_repository::PostgresTeamRepository;
