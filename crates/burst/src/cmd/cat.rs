//! Cat command - read frames from files or stdin and re-emit them
//!
//! Files are read in argument order, each decoded as one burst and
//! flattened; with no files the frames come from stdin. Output is the text
//! form by default, JSON with `--json`, or one re-marshalled burst with
//! `--pack`.

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use burst_protocol::{Burst, Frame, marshal_burst};
use burst_reader::{Framing, read_files, read_stdin};
use burst_sinks::FrameEmitter;

/// Cat command arguments
#[derive(Args, Debug)]
pub struct CatArgs {
    /// Input files, each one burst-encapsulated; stdin when absent
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Treat stdin as one plain frame instead of a burst
    #[arg(long)]
    single: bool,

    /// Render frames as JSON
    #[arg(long)]
    json: bool,

    /// Re-emit everything as one marshalled burst on stdout
    #[arg(long)]
    pack: bool,
}

/// Run the cat command
pub async fn run(args: CatArgs) -> Result<()> {
    let frames = if args.files.is_empty() {
        let framing = if args.single {
            Framing::Frame
        } else {
            Framing::Burst
        };
        read_stdin(framing)
    } else {
        read_files(&args.files).context("failed to read input")?
    };

    if args.pack {
        return emit_packed(frames);
    }

    let stdout = io::stdout();
    let color = stdout.is_terminal();
    let mut emitter = if args.json {
        FrameEmitter::json(stdout.lock())
    } else {
        FrameEmitter::text(stdout.lock(), color)
    };

    for frame in &frames {
        emitter.emit(frame);
    }
    Ok(())
}

/// Re-marshal all frames as one burst on stdout
fn emit_packed(frames: Vec<Frame>) -> Result<()> {
    let burst = Burst::from_frames(frames);
    match marshal_burst(&burst) {
        Ok(bytes) => io::stdout()
            .write_all(&bytes)
            .context("failed to write burst to stdout")?,
        Err(e) => tracing::error!(error = %e, "failed to marshal burst"),
    }
    Ok(())
}
