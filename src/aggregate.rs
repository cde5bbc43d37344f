//! Grouped reduction of a measure over a view.
//!
//! [`DatasetView::aggregate`] groups the view's records by a
//! [`Dimension`], reduces one [`Measure`] per group with a [`Reducer`],
//! and returns an [`AggTable`]. The table's row order is the order groups
//! were first seen and carries no meaning; callers pick an order after the
//! fact with [`sorted_by_key`](AggTable::sorted_by_key),
//! [`sorted_by_value_desc`](AggTable::sorted_by_value_desc) or
//! [`reindex`](AggTable::reindex).

use std::cmp::Reverse;

use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::Serialize;

use crate::dataset::DatasetView;
use crate::record::{Dimension, Measure};

/// The closed family of supported reductions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Reducer {
    Sum,
    Mean,
    Median,
    Count,
}

impl Reducer {
    pub fn name(&self) -> &'static str {
        match self {
            Reducer::Sum => "sum",
            Reducer::Mean => "mean",
            Reducer::Median => "median",
            Reducer::Count => "count",
        }
    }

    /// Reduce one group's measure values.
    ///
    /// NaN inputs are treated as missing and skipped: `Count` counts only
    /// the non-missing values, `Sum` of nothing is 0.0, and `Mean`/`Median`
    /// of nothing is NaN.
    pub fn reduce(&self, values: &[f64]) -> f64 {
        match self {
            Reducer::Sum => present(values).sum(),
            Reducer::Count => present(values).count() as f64,
            Reducer::Mean => {
                let (sum, count) = present(values)
                    .fold((0.0_f64, 0_u64), |(sum, count), v| (sum + v, count + 1));
                if count == 0 { f64::NAN } else { sum / count as f64 }
            }
            Reducer::Median => {
                let mut sorted: Vec<f64> = present(values).collect();
                if sorted.is_empty() {
                    return f64::NAN;
                }
                sorted.sort_by(f64::total_cmp);
                let mid = sorted.len() / 2;
                if sorted.len() % 2 == 1 {
                    sorted[mid]
                } else {
                    (sorted[mid - 1] + sorted[mid]) / 2.0
                }
            }
        }
    }
}

impl std::fmt::Display for Reducer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn present(values: &[f64]) -> impl Iterator<Item = f64> + '_ {
    values.iter().copied().filter(|v| !v.is_nan())
}

/// Group `(key, value)` pairs and reduce each group. Shared by dimension
/// and bin-label aggregation.
pub(crate) fn group_reduce<I>(pairs: I, reducer: Reducer) -> AggTable
where
    I: IntoIterator<Item = (String, f64)>,
{
    let mut groups: IndexMap<String, Vec<f64>> = IndexMap::new();
    for (key, value) in pairs {
        groups.entry(key).or_default().push(value);
    }
    let rows = groups
        .into_iter()
        .map(|(key, values)| (key, reducer.reduce(&values)))
        .collect();
    AggTable { rows }
}

impl<'a> DatasetView<'a> {
    /// Group by `dimension` and reduce `measure` with `reducer`.
    ///
    /// The output has exactly one row per distinct dimension value present
    /// in the view; an empty view yields an empty table.
    pub fn aggregate(&self, dimension: Dimension, measure: Measure, reducer: Reducer) -> AggTable {
        group_reduce(
            self.records()
                .map(|r| (dimension.value_of(r).into_owned(), measure.value_of(r))),
            reducer,
        )
    }
}

/// One reduced value per group key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggTable {
    rows: Vec<(String, f64)>,
}

impl AggTable {
    pub fn rows(&self) -> &[(String, f64)] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|(key, _)| key.as_str())
    }

    /// The reduced value for `key`, if that group exists.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.rows
            .iter()
            .find(|(k, _)| k == key)
            .map(|&(_, value)| value)
    }

    /// Rows sorted ascending by group key. Lexical order, which is also
    /// chronological for "YYYY-MM" keys.
    pub fn sorted_by_key(mut self) -> Self {
        self.rows.sort_by(|(a, _), (b, _)| a.cmp(b));
        self
    }

    /// Rows sorted descending by reduced value; NaN rows sort last.
    pub fn sorted_by_value_desc(mut self) -> Self {
        self.rows
            .sort_by_key(|&(_, value)| (value.is_nan(), Reverse(OrderedFloat(value))));
        self
    }

    /// Re-order onto a caller-supplied key sequence.
    ///
    /// Every requested key produces an output row; keys with no group in
    /// the table carry `None`, so a fixed axis such as the 24 upload hours
    /// or the weekday cycle stays fully populated without erroring on
    /// absent categories.
    pub fn reindex<S: AsRef<str>>(&self, keys: &[S]) -> Vec<(String, Option<f64>)> {
        keys.iter()
            .map(|key| {
                let key = key.as_ref();
                (key.to_owned(), self.get(key))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sum_and_count_skip_missing() {
        let values = [1.0, f64::NAN, 2.5];
        assert_eq!(Reducer::Sum.reduce(&values), 3.5);
        assert_eq!(Reducer::Count.reduce(&values), 2.0);
    }

    #[test]
    fn mean_is_sum_over_present_count() {
        assert_eq!(Reducer::Mean.reduce(&[1.0, 2.0, f64::NAN, 3.0]), 2.0);
        assert!(Reducer::Mean.reduce(&[f64::NAN]).is_nan());
    }

    #[test]
    fn median_odd_and_even() {
        assert_eq!(Reducer::Median.reduce(&[5.0, 1.0, 3.0]), 3.0);
        assert_eq!(Reducer::Median.reduce(&[4.0, 1.0, 3.0, 2.0]), 2.5);
        assert!(Reducer::Median.reduce(&[]).is_nan());
    }

    #[test]
    fn empty_sum_is_zero() {
        assert_eq!(Reducer::Sum.reduce(&[]), 0.0);
        assert_eq!(Reducer::Count.reduce(&[]), 0.0);
    }

    #[test]
    fn value_sort_puts_nan_last() {
        let table = group_reduce(
            vec![
                ("a".to_owned(), f64::NAN),
                ("b".to_owned(), 2.0),
                ("c".to_owned(), 5.0),
            ],
            Reducer::Mean,
        );
        let sorted = table.sorted_by_value_desc();
        let keys: Vec<&str> = sorted.keys().collect();
        assert_eq!(keys, vec!["c", "b", "a"]);
    }

    #[test]
    fn reindex_fills_missing_with_none() {
        let table = group_reduce(vec![("x".to_owned(), 1.0)], Reducer::Sum);
        let rows = table.reindex(&["w", "x"]);
        assert_eq!(rows, vec![("w".to_owned(), None), ("x".to_owned(), Some(1.0))]);
    }
}
