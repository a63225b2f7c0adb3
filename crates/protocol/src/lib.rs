//! Burst protocol - frame and burst containers plus their wire codec
//!
//! This crate provides the data types that flow through the burst tools:
//! - `Frame` - one opaque unit of payload data
//! - `Burst` - an ordered group of frames serialized together as one unit
//!
//! The wire codec (`marshal_frame`, `unmarshal_frame`, `marshal_burst`,
//! `unmarshal_burst`) is the only way frames cross a process boundary. The
//! rest of the workspace treats both types as opaque: it never inspects the
//! byte layout, only the marshal/unmarshal surface.
//!
//! # Safety
//!
//! Decoding performs bounds checking on every field access. Malformed input
//! returns a typed `ProtocolError` rather than panicking or reading out of
//! bounds.

mod burst;
mod error;
mod frame;
mod wire;

pub use burst::Burst;
pub use error::ProtocolError;
pub use frame::Frame;
pub use wire::{marshal_burst, marshal_frame, unmarshal_burst, unmarshal_frame};

// Re-export bytes for convenience
pub use bytes::Bytes;

/// Result type for protocol operations
pub type Result<T> = std::result::Result<T, ProtocolError>;

/// Default number of frames per burst
pub const DEFAULT_BURST_LEN: usize = 100;

/// Maximum size of a single encoded message (100MB)
pub const MAX_WIRE_SIZE: usize = 100 * 1024 * 1024;

/// Maximum frame count a decoded burst may claim
pub const MAX_BURST_FRAMES: usize = 1_000_000;

#[cfg(test)]
mod frame_test;
#[cfg(test)]
mod wire_test;
