//! Command line client that fetches and prints the bin collection dates of one household.

mod args;
mod output;

use std::io;

use anyhow::{Context, Result};
use binday_provider_tameside as tameside;
use clap::Parser;
use reqwest::Client;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::args::Arguments;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Arguments::parse();

    // Logs go to stderr so stdout stays clean for --json
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    // HTTP + source setup
    let client = Client::builder()
        .user_agent(concat!("binday/", env!("CARGO_PKG_VERSION")))
        .timeout(args.timeout())
        .build()?;

    let source = tameside::plugin(client, args.source_config());
    debug!(source = %source.meta().id, "source ready");

    let entries = source
        .fetch()
        .await
        .with_context(|| format!("Failed to load {} collections", source.meta().title))?;

    output::render(&mut io::stdout().lock(), entries, args.json)
}
