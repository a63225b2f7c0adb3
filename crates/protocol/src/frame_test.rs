//! Frame tests

use bytes::Bytes;

use crate::Frame;

#[test]
fn test_frame_accessors() {
    let frame = Frame::new("node-1", 1234567890, Bytes::from_static(b"hello"));

    assert_eq!(frame.origin(), "node-1");
    assert_eq!(frame.timestamp(), 1234567890);
    assert_eq!(frame.payload().as_ref(), b"hello");
}

#[test]
fn test_frame_display() {
    let frame = Frame::new("node-1", 42, Bytes::from_static(b"hello"));

    assert_eq!(frame.to_string(), "42 node-1 hello");
}

#[test]
fn test_frame_display_lossy_payload() {
    let frame = Frame::new("node-1", 42, Bytes::from_static(&[0xff, 0xfe]));

    // Invalid UTF-8 renders with replacement characters, never panics
    assert!(frame.to_string().starts_with("42 node-1 "));
}

#[test]
fn test_frame_json_form() {
    let frame = Frame::new("node-1", 42, Bytes::from_static(b"hello"));

    let json = serde_json::to_value(&frame).unwrap();
    assert_eq!(json["origin"], "node-1");
    assert_eq!(json["timestamp"], 42);
    assert_eq!(json["payload"], "hello");
}

#[test]
fn test_test_frame_pattern_bounds() {
    for _ in 0..100 {
        let frame = Frame::test_frame();

        assert!(frame.origin().len() < 20);
        assert!(frame.origin().chars().all(|c| c.is_ascii_lowercase()));
        assert!(frame.payload().len() < 20);
        assert!(frame.timestamp() > 0);
    }
}
