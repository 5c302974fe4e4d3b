//! CLI module for the member search service
//!
//! Provides subcommands for running and preparing the service:
//! - `serve`: run the HTTP API server
//! - `migrate`: apply pending database migrations
//! - `seed`: load the demo fixture

pub mod migrate;
pub mod seed;
pub mod serve;

use clap::{Parser, Subcommand};

/// Member search API - dynamic query composition over a Member/Team schema
#[derive(Parser)]
#[command(name = "member-search")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,

    /// Apply pending database migrations
    Migrate,

    /// Load the demo fixture (teamA/teamB with four members)
    Seed,
}
