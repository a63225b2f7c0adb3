//! Emitter tests

use std::io::{self, Write};

use burst_protocol::{Bytes, Frame};

use super::{FrameEmitter, JsonFrameWriter, TextFrameWriter};

fn frame(n: u64) -> Frame {
    Frame::new(format!("origin-{n}"), n, Bytes::from(format!("payload-{n}")))
}

/// Sink that refuses to flush, so JSON binding fails
struct UnflushableSink;

impl Write for UnflushableSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }
}

#[test]
fn test_text_writer_one_line_per_frame() {
    let mut out = Vec::new();
    let mut writer = TextFrameWriter::new(&mut out);

    writer.write_frame(&frame(1)).unwrap();
    writer.write_frame(&frame(2)).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text, "1 origin-1 payload-1\n2 origin-2 payload-2\n");
}

#[test]
fn test_text_writer_plain_matches_display() {
    let mut out = Vec::new();
    let f = frame(3);
    TextFrameWriter::new(&mut out).write_frame(&f).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), format!("{f}\n"));
}

#[test]
fn test_json_writer_emits_object_per_line() {
    let mut out = Vec::new();
    let mut writer = JsonFrameWriter::bind(&mut out).unwrap();

    writer.write_frame(&frame(1)).unwrap();
    writer.write_frame(&frame(2)).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);

    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["origin"], "origin-1");
    assert_eq!(first["timestamp"], 1);
    assert_eq!(first["payload"], "payload-1");
}

#[test]
fn test_json_bind_failure_degrades_to_fallback() {
    let emitter = FrameEmitter::json(UnflushableSink);

    assert!(matches!(emitter, FrameEmitter::JsonFallback(_)));
}

#[test]
fn test_fallback_emitter_does_not_panic() {
    let mut emitter = FrameEmitter::json(UnflushableSink);

    // Frames go to stderr with the bind error; the emitter itself keeps going
    emitter.emit(&frame(1));
    emitter.emit(&frame(2));
}

#[test]
fn test_emitter_preserves_arrival_order() {
    let mut out = Vec::new();
    {
        let mut emitter = FrameEmitter::text(&mut out, false);
        for n in 0..5 {
            emitter.emit(&frame(n));
        }
    }

    let text = String::from_utf8(out).unwrap();
    let timestamps: Vec<&str> = text
        .lines()
        .map(|line| line.split(' ').next().unwrap())
        .collect();
    assert_eq!(timestamps, ["0", "1", "2", "3", "4"]);
}
