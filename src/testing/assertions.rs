//! Assertion helpers for comparing aggregated tables.
//!
//! Reduced values are floating point, so equality here means "within a
//! small absolute tolerance"; two NaNs also count as equal, since NaN is
//! the designated all-missing result.

use crate::aggregate::AggTable;

/// Absolute tolerance used by the assertions in this module.
pub const TOLERANCE: f64 = 1e-9;

fn close(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || (a - b).abs() <= TOLERANCE
}

/// Assert two floats are equal within [`TOLERANCE`].
///
/// # Panics
///
/// Panics with both values if they differ by more than the tolerance.
///
/// # Example
///
/// ```
/// use trendlens::testing::assert_close;
///
/// assert_close(0.1 + 0.2, 0.3);
/// ```
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        close(actual, expected),
        "Value mismatch:\n  Expected: {expected}\n  Actual: {actual}"
    );
}

/// Assert a table holds exactly the expected key/value rows, ignoring row
/// order.
///
/// Both sides are compared sorted by key; values compare within
/// [`TOLERANCE`].
///
/// # Panics
///
/// Panics with the full contents of both sides if keys or values differ.
///
/// # Example
///
/// ```
/// use trendlens::testing::{assert_table_eq, sample_dataset};
/// use trendlens::{Dimension, Measure, Reducer};
///
/// let dataset = sample_dataset();
/// let counts = dataset
///     .view()
///     .aggregate(Dimension::Country, Measure::Views, Reducer::Count);
/// assert_table_eq(&counts, &[("BR", 3.0), ("IN", 3.0), ("US", 4.0)]);
/// ```
pub fn assert_table_eq(actual: &AggTable, expected: &[(&str, f64)]) {
    let mut actual_rows: Vec<(&str, f64)> = actual
        .rows()
        .iter()
        .map(|(k, v)| (k.as_str(), *v))
        .collect();
    let mut expected_rows: Vec<(&str, f64)> = expected.to_vec();
    actual_rows.sort_by(|a, b| a.0.cmp(b.0));
    expected_rows.sort_by(|a, b| a.0.cmp(b.0));

    let keys_match = actual_rows.len() == expected_rows.len()
        && actual_rows
            .iter()
            .zip(expected_rows.iter())
            .all(|(a, e)| a.0 == e.0 && close(a.1, e.1));
    assert!(
        keys_match,
        "Table mismatch (sorted by key):\n  Expected: {expected_rows:?}\n  Actual: {actual_rows:?}"
    );
}

/// Assert a reindexed table matches the expected rows exactly, order
/// included; `Some` values compare within [`TOLERANCE`].
///
/// # Panics
///
/// Panics with the full contents of both sides on any difference.
pub fn assert_reindexed_eq(actual: &[(String, Option<f64>)], expected: &[(&str, Option<f64>)]) {
    let rows_match = actual.len() == expected.len()
        && actual.iter().zip(expected.iter()).all(|(a, e)| {
            a.0 == e.0
                && match (a.1, e.1) {
                    (Some(av), Some(ev)) => close(av, ev),
                    (None, None) => true,
                    _ => false,
                }
        });
    assert!(
        rows_match,
        "Reindexed table mismatch:\n  Expected: {expected:?}\n  Actual: {actual:?}"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_treats_two_nans_as_equal() {
        assert_close(f64::NAN, f64::NAN);
    }

    #[test]
    #[should_panic(expected = "Value mismatch")]
    fn close_rejects_real_differences() {
        assert_close(1.0, 1.1);
    }
}
