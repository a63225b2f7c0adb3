//! Pairing state machine for writing/delta observations

use std::fmt;

/// Feed key announcing how many items a write will cover
const KEY_WRITING: &str = "writing";

/// Feed key announcing how long the write took
const KEY_DELTA: &str = "delta";

/// One throughput sample: count items written in elapsed time
///
/// Both fields are carried as the feed's own numeric tokens; the correlator
/// never parses them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    /// Number of items written
    pub count: String,

    /// Elapsed time in seconds
    pub elapsed: String,
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.count, self.elapsed)
    }
}

/// Pairs `writing` and `delta` observations into samples
///
/// Only the single most recent count is remembered; a new `writing`
/// observation always overwrites it. The count is not cleared when a sample
/// is produced, so a `delta` with no intervening `writing` re-pairs with the
/// same stale count. That at-least-once-per-count pairing is deliberate.
#[derive(Debug, Default)]
pub struct Correlator {
    last_count: Option<String>,
}

impl Correlator {
    /// Create a correlator with no pending count
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one key/value observation, yielding a sample when a delta pairs
    pub fn observe(&mut self, key: &str, value: &str) -> Option<Sample> {
        match key {
            KEY_WRITING => {
                self.last_count = Some(value.to_string());
                None
            }
            KEY_DELTA => self.last_count.as_ref().map(|count| Sample {
                count: count.clone(),
                elapsed: value.to_string(),
            }),
            other => {
                tracing::debug!(key = other, "ignoring message with unknown key");
                None
            }
        }
    }
}
