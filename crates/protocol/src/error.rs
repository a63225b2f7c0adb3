//! Protocol error types
//!
//! Errors that can occur when encoding or decoding frames and bursts.

use thiserror::Error;

/// Errors that can occur during codec operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProtocolError {
    /// Message is too short to contain the fixed header
    #[error("message too short: expected at least {expected} bytes, got {actual}")]
    TooShort { expected: usize, actual: usize },

    /// Leading magic byte does not match the expected message kind
    #[error("bad magic byte: expected {expected:#04x}, got {actual:#04x}")]
    BadMagic { expected: u8, actual: u8 },

    /// Wire version is not one this codec understands
    #[error("unsupported wire version {0}")]
    UnsupportedVersion(u8),

    /// A field extends past the end of the buffer
    #[error("truncated {field}: need {needed} bytes, {remaining} remain")]
    Truncated {
        field: &'static str,
        needed: usize,
        remaining: usize,
    },

    /// Bytes remain after the message was fully decoded
    #[error("{count} trailing bytes after message")]
    TrailingBytes { count: usize },

    /// Origin exceeds the encodable length
    #[error("origin too long: {len} bytes (max {max})")]
    OriginTooLong { len: usize, max: usize },

    /// Message exceeds the maximum wire size
    #[error("message size {size} exceeds maximum {max}")]
    TooLarge { size: usize, max: usize },

    /// A text field holds invalid UTF-8
    #[error("invalid UTF-8 in {0}")]
    InvalidUtf8(&'static str),

    /// Burst header claims more frames than allowed
    #[error("burst frame count {count} exceeds maximum {max}")]
    TooManyFrames { count: usize, max: usize },
}

impl ProtocolError {
    /// Create a message too short error
    #[inline]
    pub fn too_short(expected: usize, actual: usize) -> Self {
        Self::TooShort { expected, actual }
    }

    /// Create a truncated field error
    #[inline]
    pub fn truncated(field: &'static str, needed: usize, remaining: usize) -> Self {
        Self::Truncated {
            field,
            needed,
            remaining,
        }
    }

    /// Create a message too large error
    #[inline]
    pub fn too_large(size: usize) -> Self {
        Self::TooLarge {
            size,
            max: crate::MAX_WIRE_SIZE,
        }
    }
}
