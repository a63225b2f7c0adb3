//! Frame - the opaque unit of payload data
//!
//! A `Frame` is immutable once constructed. Components downstream of the
//! codec hold frames by value and hand them off whole; nothing outside this
//! crate depends on the field layout.

use std::fmt;

use bytes::Bytes;
use chrono::Utc;
use rand::Rng;
use serde::{Serialize, Serializer};

/// One frame of opaque payload data
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    /// Where the frame was produced
    origin: String,

    /// Nanoseconds since the Unix epoch
    timestamp: u64,

    /// Opaque payload bytes
    #[serde(serialize_with = "serialize_payload")]
    payload: Bytes,
}

impl Frame {
    /// Create a frame from its parts
    pub fn new(origin: impl Into<String>, timestamp: u64, payload: impl Into<Bytes>) -> Self {
        Self {
            origin: origin.into(),
            timestamp,
            payload: payload.into(),
        }
    }

    /// Get the origin
    #[inline]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Get the timestamp in nanoseconds since the Unix epoch
    #[inline]
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// Get the payload bytes
    #[inline]
    pub fn payload(&self) -> &Bytes {
        &self.payload
    }

    /// Generate a random frame for testing pipelines
    ///
    /// Origin and payload are short random alphabetic patterns; the
    /// timestamp is the current time.
    pub fn test_frame() -> Self {
        let mut rng = rand::rng();
        let timestamp = Utc::now().timestamp_nanos_opt().unwrap_or(0) as u64;
        Self {
            origin: random_pattern(&mut rng),
            timestamp,
            payload: Bytes::from(random_pattern(&mut rng).into_bytes()),
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.timestamp,
            self.origin,
            String::from_utf8_lossy(&self.payload)
        )
    }
}

/// Random lowercase alphabetic string of length 0..20
fn random_pattern(rng: &mut impl Rng) -> String {
    let len = rng.random_range(0..20);
    (0..len)
        .map(|_| rng.random_range(b'a'..=b'z') as char)
        .collect()
}

/// Payloads serialize as text, lossily decoded
fn serialize_payload<S: Serializer>(payload: &Bytes, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&String::from_utf8_lossy(payload))
}
