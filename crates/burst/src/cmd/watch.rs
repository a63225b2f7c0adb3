//! Watch command - print throughput samples from an ingest telemetry feed
//!
//! Connects to the ingest daemon's publish/subscribe feed and prints the
//! number of items in each write and the time the write took, space
//! separated, one pair per line. Runs until killed.

use anyhow::{Context, Result};
use clap::Args;

use burst_telemetry::DEFAULT_ENDPOINT;

/// Watch command arguments
#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Telemetry feed endpoint
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,
}

/// Run the watch command
pub async fn run(args: WatchArgs) -> Result<()> {
    burst_telemetry::watch(&args.endpoint)
        .await
        .with_context(|| format!("telemetry feed at {} failed", args.endpoint))
}
