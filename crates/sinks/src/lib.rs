//! Burst sinks - output destinations for frames and bursts
//!
//! # Architecture
//!
//! The packer accumulates frames into fixed-size bursts and flushes each
//! completed burst to a fresh sink obtained from a [`SinkProvider`]:
//!
//! ```text
//! [frames] --> [BurstPacker] --flush--> [SinkProvider::next_sink] --> stdout | {prefix}.NN
//! ```
//!
//! [`SinkSelector`] is the production provider: standard output when no
//! prefix is configured, a numbered file sequence otherwise. Rotation state
//! (prefix, next index) lives in the selector itself, never in globals.
//!
//! The emitter side renders single frames as text or JSON; see [`emit`].

/// Burst packing with flush-on-full semantics
pub mod packer;

/// Sink selection and numbered-file rotation
pub mod rotate;

/// Frame rendering (text and JSON)
pub mod emit;

mod common;

pub use common::SinkError;
pub use emit::{FrameEmitter, JsonFrameWriter, TextFrameWriter};
pub use packer::{BurstPacker, PackerSummary};
pub use rotate::{SinkProvider, SinkSelector};

// Tests are registered in their respective modules via #[cfg(test)]
