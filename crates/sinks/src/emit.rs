//! Frame rendering - text and JSON emission
//!
//! Frames are written one at a time in arrival order; there is no batching
//! and no reordering. A frame is never silently dropped: when the JSON path
//! fails, the error and the frame's text form both go to the error stream.

use std::io::Write;

use owo_colors::{OwoColorize, Style};

use crate::common::SinkError;

use burst_protocol::Frame;

/// Color styles for text output
struct Styles {
    timestamp: Style,
    origin: Style,
}

impl Styles {
    fn new(enabled: bool) -> Self {
        if enabled {
            Self {
                timestamp: Style::new().dimmed(),
                origin: Style::new().cyan(),
            }
        } else {
            Self {
                timestamp: Style::new(),
                origin: Style::new(),
            }
        }
    }
}

/// Writes a frame's human-readable text form, one line per frame
pub struct TextFrameWriter<W: Write> {
    sink: W,
    styles: Styles,
}

impl<W: Write> TextFrameWriter<W> {
    /// Create a writer with plain output
    pub fn new(sink: W) -> Self {
        Self::with_color(sink, false)
    }

    /// Create a writer, optionally styling fields for a terminal
    pub fn with_color(sink: W, color: bool) -> Self {
        Self {
            sink,
            styles: Styles::new(color),
        }
    }

    /// Write one frame
    pub fn write_frame(&mut self, frame: &Frame) -> Result<(), SinkError> {
        writeln!(
            self.sink,
            "{} {} {}",
            frame.timestamp().style(self.styles.timestamp),
            frame.origin().style(self.styles.origin),
            String::from_utf8_lossy(frame.payload())
        )?;
        Ok(())
    }
}

/// Streaming JSON frame writer bound to one sink for its lifetime
pub struct JsonFrameWriter<W: Write> {
    sink: W,
}

impl<W: Write> JsonFrameWriter<W> {
    /// Bind a JSON writer to a sink
    ///
    /// Probes the sink with a flush; an unusable sink fails at bind time,
    /// not on the first frame.
    pub fn bind(mut sink: W) -> Result<Self, SinkError> {
        sink.flush()?;
        Ok(Self { sink })
    }

    /// Write one frame as a JSON object on its own line
    pub fn write_frame(&mut self, frame: &Frame) -> Result<(), SinkError> {
        serde_json::to_writer(&mut self.sink, frame)?;
        self.sink.write_all(b"\n")?;
        Ok(())
    }
}

/// Renders frames as text or JSON, with the JSON fallback policy applied
pub enum FrameEmitter<W: Write> {
    /// Human-readable text, one frame per line
    Text(TextFrameWriter<W>),

    /// JSON objects, one frame per line
    Json(JsonFrameWriter<W>),

    /// The JSON writer could not be bound; every frame is emitted to the
    /// error stream alongside the bind error
    JsonFallback(String),
}

impl<W: Write> FrameEmitter<W> {
    /// Text emitter over the given sink
    pub fn text(sink: W, color: bool) -> Self {
        Self::Text(TextFrameWriter::with_color(sink, color))
    }

    /// JSON emitter over the given sink
    ///
    /// A bind failure is not fatal: the emitter degrades to the fallback
    /// path so no frame is lost.
    pub fn json(sink: W) -> Self {
        match JsonFrameWriter::bind(sink) {
            Ok(writer) => Self::Json(writer),
            Err(e) => Self::JsonFallback(e.to_string()),
        }
    }

    /// Emit one frame
    ///
    /// Failures are reported on the error stream; the frame's text form is
    /// re-emitted there when the JSON path fails.
    pub fn emit(&mut self, frame: &Frame) {
        match self {
            Self::Text(writer) => {
                if let Err(e) = writer.write_frame(frame) {
                    tracing::error!(error = %e, "failed to write frame");
                }
            }
            Self::Json(writer) => {
                if let Err(e) = writer.write_frame(frame) {
                    eprintln!("error JSON-encoding frame: {e}\n\n{frame}");
                }
            }
            Self::JsonFallback(bind_error) => {
                eprintln!("error JSON-encoding frame: {bind_error}\n\n{frame}");
            }
        }
    }
}

#[cfg(test)]
#[path = "emit_test.rs"]
mod emit_test;
