//! Tests for the dotted-integer version comparator

use std::cmp::Ordering;

use versync_core::Error;
use versync_core::version::compare;

#[test]
fn equal_versions() {
    assert_eq!(compare("1.2.3", "1.2.3").unwrap(), Ordering::Equal);
}

#[test]
fn last_token_decides() {
    assert_eq!(compare("1.2.3", "1.2.4").unwrap(), Ordering::Less);
    assert_eq!(compare("1.2.4", "1.2.3").unwrap(), Ordering::Greater);
}

#[test]
fn earlier_tokens_outrank_later_ones() {
    assert_eq!(compare("2.0", "1.9.9").unwrap(), Ordering::Greater);
}

#[test]
fn longer_sequence_wins_a_tie() {
    assert_eq!(compare("1.2", "1.2.0").unwrap(), Ordering::Less);
    assert_eq!(compare("1.2.0", "1.2").unwrap(), Ordering::Greater);
}

#[test]
fn pre_release_suffix_is_rejected() {
    let err = compare("1.0.0", "1.0.0-beta").unwrap_err();
    assert!(matches!(err, Error::InvalidVersionFormat { .. }));
}

#[test]
fn empty_segment_is_rejected() {
    assert!(matches!(
        compare("1..2", "1.0"),
        Err(Error::InvalidVersionFormat { .. })
    ));
}

#[test]
fn leading_zeros_compare_as_integers() {
    assert_eq!(compare("01.002.3", "1.2.3").unwrap(), Ordering::Equal);
}
