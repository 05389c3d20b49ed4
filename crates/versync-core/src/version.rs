//! Dotted-integer version comparison
//!
//! A pure dotted-integer-tuple order, not semver: `"1.2.3"` parses to
//! `[1, 2, 3]`, tokens compare pairwise, and the longer sequence wins a tie
//! (`"1.2"` < `"1.2.0"`). Pre-release or build-metadata suffixes are
//! rejected outright.

use std::cmp::Ordering;

use crate::error::{Error, Result};

/// Parse a version string into its integer tokens.
///
/// Every dot-delimited segment must be a non-empty string of digits;
/// leading zeros fold (`"01"` parses to `1`).
pub fn parse_tokens(version: &str) -> Result<Vec<u64>> {
    version
        .split('.')
        .map(|segment| {
            if segment.is_empty() {
                return Err(Error::InvalidVersionFormat {
                    version: version.to_string(),
                    message: "empty segment".to_string(),
                });
            }
            segment
                .parse::<u64>()
                .map_err(|_| Error::InvalidVersionFormat {
                    version: version.to_string(),
                    message: format!("non-numeric segment '{segment}'"),
                })
        })
        .collect()
}

/// Order two version strings.
///
/// Tokens compare pairwise up to the shorter length; the first unequal pair
/// decides. If all compared tokens are equal the longer sequence is greater,
/// so `"1.2"` < `"1.2.0"`.
///
/// # Errors
///
/// Returns `InvalidVersionFormat` if either string has an empty or
/// non-numeric segment (e.g. `"1.0.0-beta"`, `"1..2"`).
pub fn compare(a: &str, b: &str) -> Result<Ordering> {
    let left = parse_tokens(a)?;
    let right = parse_tokens(b)?;

    for (l, r) in left.iter().zip(right.iter()) {
        match l.cmp(r) {
            Ordering::Equal => continue,
            unequal => return Ok(unequal),
        }
    }

    Ok(left.len().cmp(&right.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_zeros_fold() {
        assert_eq!(compare("01.2", "1.2").unwrap(), Ordering::Equal);
    }

    #[test]
    fn empty_segment_is_rejected() {
        assert!(matches!(
            parse_tokens("1..2"),
            Err(Error::InvalidVersionFormat { .. })
        ));
    }
}
