//! Burst telemetry - throughput samples from an ingest feed
//!
//! Subscribes to an ingest daemon's publish/subscribe feed and pairs its
//! `writing` and `delta` messages into throughput samples: "count items were
//! written in elapsed time", one sample per line on standard output.
//!
//! # Architecture
//!
//! ```text
//! [SUB socket] --key/value--> [Correlator] --Sample--> stdout
//! ```
//!
//! The correlator is a pure two-state machine with no knowledge of the
//! socket; the feed loop owns the subscription for the process lifetime and
//! never terminates on its own.

mod correlator;
mod error;
mod feed;

pub use correlator::{Correlator, Sample};
pub use error::TelemetryError;
pub use feed::{DEFAULT_ENDPOINT, watch};

#[cfg(test)]
mod correlator_test;
