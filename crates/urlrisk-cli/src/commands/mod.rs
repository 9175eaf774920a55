//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod rules;
pub mod scan;
pub mod serve;

/// urlrisk - Heuristic phishing-risk scoring for URLs
#[derive(Parser)]
#[command(name = "urlrisk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve(serve::ServeArgs),

    /// Score a single URL without starting the server
    Scan(scan::ScanArgs),

    /// List the scoring rules
    Rules,
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Serve(args) => serve::execute(args).await,
            Commands::Scan(args) => scan::execute(args),
            Commands::Rules => rules::execute(),
        }
    }
}
