//! Binary crate for the `weather-proxy` server.
//!
//! This crate focuses on:
//! - Parsing CLI arguments (listen address)
//! - Loading configuration from the environment, failing fast without an API key
//! - Logging setup and running the HTTP server

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
