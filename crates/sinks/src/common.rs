//! Common types for sinks

use std::io;

use thiserror::Error;

use burst_protocol::ProtocolError;

/// Common sink errors
#[derive(Debug, Error)]
pub enum SinkError {
    /// A sink could not be created
    #[error("failed to create sink {name}: {source}")]
    Create { name: String, source: io::Error },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Frame or burst encoding failed
    #[error("encode failed: {0}")]
    Encode(#[from] ProtocolError),

    /// JSON serialization failed
    #[error("JSON encode failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl SinkError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
