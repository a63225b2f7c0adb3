//! burst - command-line tools for frame and burst streams
//!
//! # Usage
//!
//! ```bash
//! # Generate 1000 random frames as bursts of 100 on stdout
//! burst gen --count 1000
//!
//! # One burst per numbered file: frames.00, frames.01, ...
//! burst gen --count 1000 --split-files frames
//!
//! # Print the frames in a stream of burst files
//! burst cat frames.00 frames.01
//!
//! # Watch an ingest daemon's telemetry feed
//! burst watch
//! ```

mod cmd;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Command-line tools for frame and burst streams
#[derive(Parser, Debug)]
#[command(name = "burst")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate random frames for testing
    Gen(cmd::generate::GenArgs),

    /// Read frames from files or stdin and re-emit them
    Cat(cmd::cat::CatArgs),

    /// Watch an ingest telemetry feed and print throughput samples
    Watch(cmd::watch::WatchArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref().unwrap_or("info"))?;

    match cli.command {
        Command::Gen(args) => cmd::generate::run(args).await,
        Command::Cat(args) => cmd::cat::run(args).await,
        Command::Watch(args) => cmd::watch::run(args).await,
    }
}

/// Initialize the tracing subscriber for logging
///
/// Logs go to stderr: stdout carries frame and sample data.
fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level)
        .or_else(|_| EnvFilter::try_new("info"))
        .map_err(|e| anyhow::anyhow!("invalid log level: {}", e))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();

    Ok(())
}
