//! Burst reader - normalize frames arriving from stdin or a list of files
//!
//! Sources are consumed one at a time, fully buffered, and decoded as either
//! a burst or a single frame. Frames from successive sources concatenate in
//! source order; bursts are flattened in place.
//!
//! # Error policy
//!
//! - Failure to open an explicitly named file is fatal (`ReadError::Open`).
//! - Decode failure on one source is logged and that source is skipped;
//!   sibling sources continue.
//! - A read that fails partway through still decodes whatever was buffered
//!   before the error, so a trailing I/O error never loses buffered frames.

mod reader;

pub use reader::{Framing, ReadError, read_files, read_source, read_stdin};
