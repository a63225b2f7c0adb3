//! Burst packer - fixed-size accumulation with flush-on-full
//!
//! Frames are appended to an in-memory buffer of capacity `burst_len`. When
//! the buffer fills, it is built into a burst, marshalled, and written to
//! the next sink from the provider; the buffer then resets.
//!
//! A final partial buffer is never flushed: `finish` discards it and reports
//! the count in the summary. Pipelines that need every frame delivered must
//! generate counts aligned to the burst length.

use crate::common::SinkError;
use crate::rotate::SinkProvider;

use burst_protocol::{Burst, Frame, marshal_burst};

/// Accumulates frames into fixed-size bursts and flushes each to a sink
#[derive(Debug)]
pub struct BurstPacker<P: SinkProvider> {
    burst_len: usize,
    buf: Vec<Frame>,
    provider: P,
    bursts_written: u64,
    frames_written: u64,
}

/// Counters reported when a packer is finished
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PackerSummary {
    /// Bursts successfully written to a sink
    pub bursts_written: u64,

    /// Frames contained in those bursts
    pub frames_written: u64,

    /// Frames left in the final partial buffer and discarded
    pub frames_discarded: u64,
}

impl<P: SinkProvider> BurstPacker<P> {
    /// Create a packer flushing every `burst_len` frames
    ///
    /// `burst_len` must be at least 1.
    pub fn new(burst_len: usize, provider: P) -> Result<Self, SinkError> {
        if burst_len == 0 {
            return Err(SinkError::config("burst length must be at least 1"));
        }
        Ok(Self {
            burst_len,
            buf: Vec::with_capacity(burst_len),
            provider,
            bursts_written: 0,
            frames_written: 0,
        })
    }

    /// Append one frame, flushing if the buffer reaches capacity
    ///
    /// A marshal or write failure drops the completed burst after logging
    /// and packing continues. Failure to obtain the next sink is fatal.
    pub fn push(&mut self, frame: Frame) -> Result<(), SinkError> {
        self.buf.push(frame);
        if self.buf.len() >= self.burst_len {
            self.flush_full()?;
        }
        Ok(())
    }

    /// Number of frames waiting in the partial buffer
    #[inline]
    pub fn pending(&self) -> usize {
        self.buf.len()
    }

    /// Finish packing, discarding any partial buffer
    pub fn finish(self) -> PackerSummary {
        let discarded = self.buf.len() as u64;
        if discarded > 0 {
            tracing::debug!(frames = discarded, "discarding partial burst");
        }
        PackerSummary {
            bursts_written: self.bursts_written,
            frames_written: self.frames_written,
            frames_discarded: discarded,
        }
    }

    fn flush_full(&mut self) -> Result<(), SinkError> {
        let frames = std::mem::replace(&mut self.buf, Vec::with_capacity(self.burst_len));
        let burst = Burst::from_frames(frames);

        let bytes = match marshal_burst(&burst) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::error!(error = %e, "failed to marshal burst, dropping");
                return Ok(());
            }
        };

        let mut sink = self.provider.next_sink()?;
        match sink.write_all(&bytes).and_then(|_| sink.flush()) {
            Ok(()) => {
                self.bursts_written += 1;
                self.frames_written += burst.len() as u64;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to write burst, dropping");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "packer_test.rs"]
mod packer_test;
