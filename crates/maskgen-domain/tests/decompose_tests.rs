//! Integration tests for interval decomposition
//!
//! These tests exercise the public API end to end: parse bounds, decompose,
//! render, and check coverage by brute force.

use maskgen_domain::{DigitString, Interval, MaskRenderer, Pattern};
use std::collections::HashSet;

fn decompose(low: &str, high: &str) -> Vec<Pattern> {
    Interval::parse(low, high)
        .expect("valid interval")
        .decompose()
        .expect("decomposition succeeds")
}

fn render(patterns: &[Pattern]) -> Vec<String> {
    MaskRenderer::default().render_all(patterns)
}

/// Check that the patterns cover exactly `[low, high]`, each value once
fn assert_partition(low: &str, high: &str, patterns: &[Pattern]) {
    let interval = Interval::parse(low, high).unwrap();
    let total: u128 = patterns.iter().map(|p| p.cardinality()).sum();
    assert_eq!(Some(total), interval.count(), "pattern sizes must add up");

    let mut seen = HashSet::new();
    for pattern in patterns {
        for value in pattern.expand() {
            assert!(seen.insert(value.clone()), "{} is matched twice", value);
            assert!(
                interval.contains(&value),
                "{} matches {} outside {}",
                pattern,
                value,
                interval
            );
        }
    }
}

#[test]
fn test_width_seven_singletons() {
    assert_eq!(render(&decompose("0000000", "0000000")), vec!["0000000"]);
    assert_eq!(render(&decompose("1234567", "1234567")), vec!["1234567"]);
}

#[test]
fn test_width_seven_aligned_blocks() {
    assert_eq!(render(&decompose("0000000", "9999999")), vec!["XXXXXXX"]);
    assert_eq!(render(&decompose("1000000", "1999999")), vec!["1XXXXXX"]);
    assert_eq!(render(&decompose("1200000", "1299999")), vec!["12XXXXX"]);
    assert_eq!(render(&decompose("1230000", "1239999")), vec!["123XXXX"]);
}

#[test]
fn test_width_seven_non_aligned_tail() {
    let patterns = decompose("1235000", "1236999");
    assert_partition("1235000", "1236999", &patterns);
    assert_eq!(render(&patterns), vec!["123[5-6]XXX"]);
}

#[test]
fn test_width_seven_ragged_range() {
    let patterns = decompose("0012345", "0987654");
    assert_partition("0012345", "0987654", &patterns);

    // Output is grouped: every mask starts with the shared leading zero
    assert!(render(&patterns).iter().all(|m| m.starts_with('0')));
}

#[test]
fn test_registry_like_ranges() {
    for (low, high) in [
        ("0000000", "0499999"),
        ("5550000", "5559999"),
        ("2600000", "2699999"),
        ("8950000", "9129999"),
        ("0000001", "0099998"),
    ] {
        let patterns = decompose(low, high);
        assert_partition(low, high, &patterns);
    }
}

#[test]
fn test_exhaustive_width_two() {
    for low in 0..100u32 {
        for high in low..100u32 {
            let (lo, hi) = (format!("{:02}", low), format!("{:02}", high));
            let patterns = decompose(&lo, &hi);

            let mut values: Vec<String> = patterns
                .iter()
                .flat_map(|p| p.expand())
                .map(|v| v.to_string())
                .collect();
            values.sort();
            let expected: Vec<String> = (low..=high).map(|v| format!("{:02}", v)).collect();
            assert_eq!(values, expected, "interval [{}, {}]", lo, hi);
        }
    }
}

#[test]
fn test_wide_interval_does_not_overflow_the_stack() {
    let low = format!("1{}", "0".repeat(199));
    let high = format!("8{}", "7".repeat(199));
    let patterns = decompose(&low, &high);

    assert!(patterns.iter().all(|p| p.width() == 200));
    let first = DigitString::parse(&low).unwrap();
    assert!(patterns[0].matches(&first));
}

#[test]
fn test_repeated_calls_are_identical() {
    let first = render(&decompose("0012345", "0987654"));
    for _ in 0..5 {
        assert_eq!(render(&decompose("0012345", "0987654")), first);
    }
}
