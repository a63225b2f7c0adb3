//! Telemetry error types

use thiserror::Error;
use zeromq::ZmqError;

/// Errors that end the telemetry watch
///
/// Only startup failures are fatal; per-message receive errors are logged
/// inside the loop and never surface here.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// Could not connect to the feed endpoint
    #[error("failed to connect to {endpoint}: {source}")]
    Connect {
        endpoint: String,
        source: ZmqError,
    },

    /// Could not establish the subscription
    #[error("failed to subscribe: {0}")]
    Subscribe(ZmqError),
}
