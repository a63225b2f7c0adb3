//! Wire codec tests

use bytes::Bytes;

use crate::{
    Burst, Frame, ProtocolError, marshal_burst, marshal_frame, unmarshal_burst, unmarshal_frame,
};

fn frame(n: u64) -> Frame {
    Frame::new(format!("origin-{n}"), n, Bytes::from(format!("payload-{n}")))
}

#[test]
fn test_frame_round_trip() {
    let original = frame(7);
    let bytes = marshal_frame(&original).unwrap();
    let decoded = unmarshal_frame(&bytes).unwrap();

    assert_eq!(decoded, original);
}

#[test]
fn test_frame_round_trip_empty_fields() {
    let original = Frame::new("", 0, Bytes::new());
    let bytes = marshal_frame(&original).unwrap();

    assert_eq!(unmarshal_frame(&bytes).unwrap(), original);
}

#[test]
fn test_burst_round_trip() {
    let frames: Vec<Frame> = (0..10).map(frame).collect();
    let original = Burst::from_frames(frames);
    let bytes = marshal_burst(&original).unwrap();
    let decoded = unmarshal_burst(&bytes).unwrap();

    assert_eq!(decoded, original);
}

#[test]
fn test_empty_burst_round_trip() {
    let bytes = marshal_burst(&Burst::default()).unwrap();
    let decoded = unmarshal_burst(&bytes).unwrap();

    assert!(decoded.is_empty());
}

#[test]
fn test_unmarshal_frame_empty_input() {
    let err = unmarshal_frame(&[]).unwrap_err();

    assert!(matches!(err, ProtocolError::TooShort { .. }));
}

#[test]
fn test_unmarshal_frame_bad_magic() {
    let mut bytes = marshal_frame(&frame(1)).unwrap().to_vec();
    bytes[0] = 0x00;

    let err = unmarshal_frame(&bytes).unwrap_err();
    assert!(matches!(err, ProtocolError::BadMagic { .. }));
}

#[test]
fn test_unmarshal_frame_unsupported_version() {
    let mut bytes = marshal_frame(&frame(1)).unwrap().to_vec();
    bytes[1] = 99;

    let err = unmarshal_frame(&bytes).unwrap_err();
    assert_eq!(err, ProtocolError::UnsupportedVersion(99));
}

#[test]
fn test_unmarshal_frame_truncated() {
    let bytes = marshal_frame(&frame(1)).unwrap();

    let err = unmarshal_frame(&bytes[..bytes.len() - 3]).unwrap_err();
    assert!(matches!(err, ProtocolError::Truncated { .. }));
}

#[test]
fn test_unmarshal_frame_trailing_bytes() {
    let mut bytes = marshal_frame(&frame(1)).unwrap().to_vec();
    bytes.extend_from_slice(b"junk");

    let err = unmarshal_frame(&bytes).unwrap_err();
    assert_eq!(err, ProtocolError::TrailingBytes { count: 4 });
}

#[test]
fn test_unmarshal_burst_rejects_frame_bytes() {
    // A frame is not a burst; framing is never inferred from content
    let bytes = marshal_frame(&frame(1)).unwrap();

    let err = unmarshal_burst(&bytes).unwrap_err();
    assert!(matches!(err, ProtocolError::BadMagic { .. }));
}

#[test]
fn test_unmarshal_burst_truncated_table() {
    let frames: Vec<Frame> = (0..3).map(frame).collect();
    let bytes = marshal_burst(&Burst::from_frames(frames)).unwrap();

    let err = unmarshal_burst(&bytes[..bytes.len() / 2]).unwrap_err();
    assert!(matches!(
        err,
        ProtocolError::Truncated { .. } | ProtocolError::TooShort { .. }
    ));
}

#[test]
fn test_unmarshal_burst_excessive_count() {
    // Header claims far more frames than the buffer could hold
    let mut bytes = vec![0xBB, 1];
    bytes.extend_from_slice(&u32::MAX.to_le_bytes());

    let err = unmarshal_burst(&bytes).unwrap_err();
    assert!(matches!(err, ProtocolError::TooManyFrames { .. }));
}

#[test]
fn test_unmarshal_burst_trailing_bytes() {
    let mut bytes = marshal_burst(&Burst::from_frames(vec![frame(1)]))
        .unwrap()
        .to_vec();
    bytes.push(0xAA);

    let err = unmarshal_burst(&bytes).unwrap_err();
    assert_eq!(err, ProtocolError::TrailingBytes { count: 1 });
}

#[test]
fn test_marshal_failures_are_deterministic() {
    let frames: Vec<Frame> = (0..2).map(frame).collect();
    let bytes = marshal_burst(&Burst::from_frames(frames)).unwrap();

    let first = unmarshal_burst(&bytes[..7]).unwrap_err();
    let second = unmarshal_burst(&bytes[..7]).unwrap_err();
    assert_eq!(first, second);
}
