//! Sink selection and numbered-file rotation
//!
//! Sink choice is a pure function of (prefix, index). With no prefix every
//! flush shares standard output; with a prefix, flush k owns a freshly
//! created file `{prefix}.{k:02}`.

use std::fs::File;
use std::io::{self, Write};

use crate::common::SinkError;

/// Yields a fresh sink for each flush
///
/// Each returned sink is fully owned by one flush; no two flushes share a
/// sink unless the provider deliberately hands out the same stream (as the
/// stdout selector does).
pub trait SinkProvider {
    /// Get the sink for the next flush
    fn next_sink(&mut self) -> Result<Box<dyn Write>, SinkError>;
}

/// Rotation state for the numbered output file sequence
///
/// Holds the configured prefix and the next file index. All rotation state
/// lives here; there are no process-wide counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkSelector {
    prefix: Option<String>,
    next_index: u32,
}

impl SinkSelector {
    /// Selector that writes every flush to standard output
    pub fn stdout() -> Self {
        Self {
            prefix: None,
            next_index: 0,
        }
    }

    /// Selector that writes flush k to `{prefix}.{k:02}`
    pub fn split_files(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
            next_index: 0,
        }
    }

    /// The file name the next flush will create, if rotation is configured
    pub fn next_path(&self) -> Option<String> {
        self.prefix
            .as_ref()
            .map(|prefix| format!("{}.{:02}", prefix, self.next_index))
    }

    /// Index of the next flush in the file sequence
    #[inline]
    pub fn next_index(&self) -> u32 {
        self.next_index
    }
}

impl SinkProvider for SinkSelector {
    fn next_sink(&mut self) -> Result<Box<dyn Write>, SinkError> {
        match self.next_path() {
            None => Ok(Box::new(io::stdout())),
            Some(name) => {
                let file = File::create(&name).map_err(|source| SinkError::Create {
                    name: name.clone(),
                    source,
                })?;
                self.next_index += 1;
                Ok(Box::new(file))
            }
        }
    }
}

#[cfg(test)]
#[path = "rotate_test.rs"]
mod rotate_test;
