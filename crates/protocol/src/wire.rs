//! Wire codec for frames and bursts
//!
//! # Wire Format
//!
//! All integers are little-endian. A frame:
//!
//! ```text
//! [1 byte: magic 0xBF] [1 byte: version]
//! [u16: origin length] [origin bytes]
//! [u64: timestamp]
//! [u32: payload length] [payload bytes]
//! ```
//!
//! A burst:
//!
//! ```text
//! [1 byte: magic 0xBB] [1 byte: version]
//! [u32: frame count]
//! repeated: [u32: frame length] [encoded frame]
//! ```
//!
//! Decoding validates the buffer stage by stage: size bounds, magic,
//! version, then per-field bounds. A message with bytes left over after the
//! final field is rejected, so "decode the whole input as exactly one
//! message" holds by construction.

use bytes::{BufMut, Bytes, BytesMut};

use crate::{Burst, Frame, MAX_BURST_FRAMES, MAX_WIRE_SIZE, ProtocolError, Result};

/// Leading byte of an encoded frame
const FRAME_MAGIC: u8 = 0xBF;

/// Leading byte of an encoded burst
const BURST_MAGIC: u8 = 0xBB;

/// Wire version this codec produces and accepts
const WIRE_VERSION: u8 = 1;

/// Fixed bytes before a frame's variable-length fields
const FRAME_HEADER_LEN: usize = 4;

/// Fixed bytes before a burst's frame table
const BURST_HEADER_LEN: usize = 6;

/// Encode a single frame
pub fn marshal_frame(frame: &Frame) -> Result<Bytes> {
    let origin = frame.origin().as_bytes();
    if origin.len() > u16::MAX as usize {
        return Err(ProtocolError::OriginTooLong {
            len: origin.len(),
            max: u16::MAX as usize,
        });
    }

    let size = FRAME_HEADER_LEN + origin.len() + 8 + 4 + frame.payload().len();
    if size > MAX_WIRE_SIZE {
        return Err(ProtocolError::too_large(size));
    }

    let mut buf = BytesMut::with_capacity(size);
    buf.put_u8(FRAME_MAGIC);
    buf.put_u8(WIRE_VERSION);
    buf.put_u16_le(origin.len() as u16);
    buf.put_slice(origin);
    buf.put_u64_le(frame.timestamp());
    buf.put_u32_le(frame.payload().len() as u32);
    buf.put_slice(frame.payload());
    Ok(buf.freeze())
}

/// Decode a single frame, consuming the whole buffer
pub fn unmarshal_frame(buf: &[u8]) -> Result<Frame> {
    let (frame, consumed) = decode_frame(buf)?;
    if consumed < buf.len() {
        return Err(ProtocolError::TrailingBytes {
            count: buf.len() - consumed,
        });
    }
    Ok(frame)
}

/// Encode a burst of frames
pub fn marshal_burst(burst: &Burst) -> Result<Bytes> {
    let encoded: Vec<Bytes> = burst
        .frames()
        .iter()
        .map(marshal_frame)
        .collect::<Result<_>>()?;

    let size = BURST_HEADER_LEN + encoded.iter().map(|f| 4 + f.len()).sum::<usize>();
    if size > MAX_WIRE_SIZE {
        return Err(ProtocolError::too_large(size));
    }

    let mut buf = BytesMut::with_capacity(size);
    buf.put_u8(BURST_MAGIC);
    buf.put_u8(WIRE_VERSION);
    buf.put_u32_le(encoded.len() as u32);
    for frame in &encoded {
        buf.put_u32_le(frame.len() as u32);
        buf.put_slice(frame);
    }
    Ok(buf.freeze())
}

/// Decode a burst, consuming the whole buffer
pub fn unmarshal_burst(buf: &[u8]) -> Result<Burst> {
    if buf.len() < BURST_HEADER_LEN {
        return Err(ProtocolError::too_short(BURST_HEADER_LEN, buf.len()));
    }
    if buf.len() > MAX_WIRE_SIZE {
        return Err(ProtocolError::too_large(buf.len()));
    }
    check_magic(buf[0], BURST_MAGIC)?;
    check_version(buf[1])?;

    let count = read_u32(buf, 2, "frame count")? as usize;
    if count > MAX_BURST_FRAMES {
        return Err(ProtocolError::TooManyFrames {
            count,
            max: MAX_BURST_FRAMES,
        });
    }

    let mut offset = BURST_HEADER_LEN;
    let mut frames = Vec::with_capacity(count.min(crate::DEFAULT_BURST_LEN));
    for _ in 0..count {
        let len = read_u32(buf, offset, "frame length")? as usize;
        offset += 4;
        let slice = take(buf, offset, len, "frame body")?;
        offset += len;

        let (frame, consumed) = decode_frame(slice)?;
        if consumed != len {
            return Err(ProtocolError::TrailingBytes {
                count: len - consumed,
            });
        }
        frames.push(frame);
    }

    if offset < buf.len() {
        return Err(ProtocolError::TrailingBytes {
            count: buf.len() - offset,
        });
    }
    Ok(Burst::from_frames(frames))
}

/// Decode one frame from the front of `buf`, returning it and the bytes consumed
fn decode_frame(buf: &[u8]) -> Result<(Frame, usize)> {
    if buf.len() < FRAME_HEADER_LEN {
        return Err(ProtocolError::too_short(FRAME_HEADER_LEN, buf.len()));
    }
    if buf.len() > MAX_WIRE_SIZE {
        return Err(ProtocolError::too_large(buf.len()));
    }
    check_magic(buf[0], FRAME_MAGIC)?;
    check_version(buf[1])?;

    let origin_len = read_u16(buf, 2, "origin length")? as usize;
    let mut offset = FRAME_HEADER_LEN;

    let origin = take(buf, offset, origin_len, "origin")?;
    let origin = std::str::from_utf8(origin)
        .map_err(|_| ProtocolError::InvalidUtf8("origin"))?
        .to_string();
    offset += origin_len;

    let timestamp = read_u64(buf, offset, "timestamp")?;
    offset += 8;

    let payload_len = read_u32(buf, offset, "payload length")? as usize;
    offset += 4;

    let payload = take(buf, offset, payload_len, "payload")?;
    offset += payload_len;

    Ok((
        Frame::new(origin, timestamp, Bytes::copy_from_slice(payload)),
        offset,
    ))
}

fn check_magic(actual: u8, expected: u8) -> Result<()> {
    if actual != expected {
        return Err(ProtocolError::BadMagic { expected, actual });
    }
    Ok(())
}

fn check_version(version: u8) -> Result<()> {
    if version != WIRE_VERSION {
        return Err(ProtocolError::UnsupportedVersion(version));
    }
    Ok(())
}

fn take<'a>(buf: &'a [u8], offset: usize, len: usize, field: &'static str) -> Result<&'a [u8]> {
    let end = offset
        .checked_add(len)
        .ok_or_else(|| ProtocolError::truncated(field, len, buf.len().saturating_sub(offset)))?;
    if end > buf.len() {
        return Err(ProtocolError::truncated(
            field,
            len,
            buf.len().saturating_sub(offset),
        ));
    }
    Ok(&buf[offset..end])
}

fn read_u16(buf: &[u8], offset: usize, field: &'static str) -> Result<u16> {
    let bytes = take(buf, offset, 2, field)?;
    Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
}

fn read_u32(buf: &[u8], offset: usize, field: &'static str) -> Result<u32> {
    let bytes = take(buf, offset, 4, field)?;
    Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

fn read_u64(buf: &[u8], offset: usize, field: &'static str) -> Result<u64> {
    let bytes = take(buf, offset, 8, field)?;
    let mut raw = [0u8; 8];
    raw.copy_from_slice(bytes);
    Ok(u64::from_le_bytes(raw))
}
