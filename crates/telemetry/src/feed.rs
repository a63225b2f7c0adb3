//! Feed subscription loop
//!
//! The subscription channel is acquired once at startup and held for the
//! process lifetime; there is no termination condition and no explicit
//! release. Process exit reclaims the socket.

use zeromq::{Socket, SocketRecv, SubSocket};

use crate::correlator::Correlator;
use crate::error::TelemetryError;

/// Where the ingest daemon publishes its telemetry
pub const DEFAULT_ENDPOINT: &str = "tcp://localhost:5570";

/// Subscribe to the feed and print one sample line per paired observation
///
/// Connect and subscribe failures are fatal. Once the loop is running,
/// receive errors and malformed messages are logged and skipped.
pub async fn watch(endpoint: &str) -> Result<(), TelemetryError> {
    let mut socket = SubSocket::new();
    socket
        .connect(endpoint)
        .await
        .map_err(|source| TelemetryError::Connect {
            endpoint: endpoint.to_string(),
            source,
        })?;
    socket
        .subscribe("")
        .await
        .map_err(TelemetryError::Subscribe)?;

    tracing::info!(endpoint, "watching telemetry feed");

    let mut correlator = Correlator::new();
    loop {
        let msg = match socket.recv().await {
            Ok(msg) => msg,
            Err(e) => {
                tracing::error!(error = %e, "receive failed");
                continue;
            }
        };

        if msg.len() < 2 {
            tracing::warn!(parts = msg.len(), "need two values in message");
            continue;
        }
        let (Some(key), Some(value)) = (msg.get(0), msg.get(1)) else {
            continue;
        };
        let key = text_part(key);
        let value = text_part(value);

        if let Some(sample) = correlator.observe(&key, &value) {
            println!("{sample}");
        }
    }
}

/// Decode one feed message part, trimming surrounding whitespace
fn text_part(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).trim().to_string()
}
