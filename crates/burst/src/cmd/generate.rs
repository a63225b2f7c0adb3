//! Gen command - generate random frames for testing
//!
//! By default frames are packed into bursts and written to stdout. With
//! `--split-files` each burst goes to its own numbered file. With `--plain`
//! the tool degrades to producing exactly one raw marshalled frame.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Args;

use burst_protocol::{DEFAULT_BURST_LEN, Frame, marshal_frame};
use burst_sinks::{BurstPacker, SinkSelector};

/// Gen command arguments
#[derive(Args, Debug)]
pub struct GenArgs {
    /// Number of frames to generate (forced to 1 with --plain)
    #[arg(short = 'n', long, default_value_t = 100)]
    count: usize,

    /// Number of frames per burst
    #[arg(short = 'b', long, default_value_t = DEFAULT_BURST_LEN)]
    burst_len: usize,

    /// Write each burst to its own numbered file, named with this prefix
    #[arg(long, value_name = "PREFIX")]
    split_files: Option<String>,

    /// Emit plain marshalled frames instead of bursts
    #[arg(long)]
    plain: bool,
}

/// Run the gen command
pub async fn run(args: GenArgs) -> Result<()> {
    let count = effective_count(args.count, args.plain);

    if args.plain {
        return gen_plain(count);
    }

    let selector = match &args.split_files {
        Some(prefix) => SinkSelector::split_files(prefix),
        None => SinkSelector::stdout(),
    };

    let mut packer = BurstPacker::new(args.burst_len, selector)?;
    for _ in 0..count {
        packer.push(Frame::test_frame())?;
    }

    let summary = packer.finish();
    tracing::info!(
        bursts = summary.bursts_written,
        frames = summary.frames_written,
        discarded = summary.frames_discarded,
        "generation complete"
    );
    Ok(())
}

/// Plain mode always produces exactly one raw frame
fn effective_count(requested: usize, plain: bool) -> usize {
    if plain { 1 } else { requested }
}

fn gen_plain(count: usize) -> Result<()> {
    let mut stdout = io::stdout();
    for _ in 0..count {
        let frame = Frame::test_frame();
        match marshal_frame(&frame) {
            Ok(bytes) => stdout
                .write_all(&bytes)
                .context("failed to write frame to stdout")?,
            Err(e) => tracing::error!(error = %e, "failed to marshal frame, skipping"),
        }
    }
    Ok(())
}
