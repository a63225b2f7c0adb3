//! Correlator pairing tests

use crate::{Correlator, Sample};

fn sample(count: &str, elapsed: &str) -> Sample {
    Sample {
        count: count.to_string(),
        elapsed: elapsed.to_string(),
    }
}

#[test]
fn test_writing_then_delta_pairs() {
    let mut correlator = Correlator::new();

    assert_eq!(correlator.observe("writing", "10"), None);
    assert_eq!(correlator.observe("delta", "0.5"), Some(sample("10", "0.5")));
}

#[test]
fn test_lone_delta_yields_nothing() {
    let mut correlator = Correlator::new();

    assert_eq!(correlator.observe("delta", "0.5"), None);
}

#[test]
fn test_stale_count_re_pairs() {
    // The count is not cleared on pairing; a second delta re-uses it
    let mut correlator = Correlator::new();

    correlator.observe("writing", "10");
    assert_eq!(correlator.observe("delta", "0.5"), Some(sample("10", "0.5")));
    assert_eq!(correlator.observe("delta", "0.7"), Some(sample("10", "0.7")));
}

#[test]
fn test_newer_writing_overwrites() {
    // No queue: only the most recent count is remembered
    let mut correlator = Correlator::new();

    correlator.observe("writing", "10");
    correlator.observe("writing", "20");
    assert_eq!(correlator.observe("delta", "1.0"), Some(sample("20", "1.0")));
}

#[test]
fn test_unknown_keys_are_ignored() {
    let mut correlator = Correlator::new();

    correlator.observe("writing", "10");
    assert_eq!(correlator.observe("acking", "3"), None);

    // State is untouched by the unknown key
    assert_eq!(correlator.observe("delta", "0.2"), Some(sample("10", "0.2")));
}

#[test]
fn test_sample_display_is_space_separated() {
    assert_eq!(sample("10", "0.5").to_string(), "10 0.5");
}
