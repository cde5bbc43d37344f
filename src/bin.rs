//! Binning of a numeric measure into labeled intervals.
//!
//! A [`BinSpec`] turns an ordered boundary list into left-closed,
//! right-open intervals `[b_i, b_{i+1})`, the last of which extends to
//! `+∞` when the final boundary is infinite. Binning a view yields a
//! [`BinnedView`] that can be aggregated by bin label exactly like a
//! dimension.

use serde::Serialize;

use crate::aggregate::{AggTable, Reducer, group_reduce};
use crate::dataset::DatasetView;
use crate::error::BinSpecError;
use crate::record::{Measure, Record};

/// An ordered set of interval boundaries with one label per interval.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinSpec {
    boundaries: Vec<f64>,
    labels: Vec<String>,
}

impl BinSpec {
    /// Build a spec from `boundaries` (strictly increasing, at least two,
    /// the last may be `f64::INFINITY`) and exactly one label per
    /// interval.
    pub fn new<I, S>(boundaries: Vec<f64>, labels: I) -> Result<Self, BinSpecError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if boundaries.len() < 2 {
            return Err(BinSpecError::TooFewBoundaries(boundaries.len()));
        }
        for (i, pair) in boundaries.windows(2).enumerate() {
            if !(pair[0] < pair[1]) {
                return Err(BinSpecError::BoundariesNotIncreasing(i + 1));
            }
        }
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.len() != boundaries.len() - 1 {
            return Err(BinSpecError::LabelCountMismatch {
                expected: boundaries.len() - 1,
                got: labels.len(),
            });
        }
        Ok(BinSpec { boundaries, labels })
    }

    pub fn boundaries(&self) -> &[f64] {
        &self.boundaries
    }

    /// Interval labels, in boundary order. The natural `reindex` axis for
    /// a binned aggregation.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The interval index for `value`.
    ///
    /// A value equal to a boundary belongs to the interval starting
    /// there. Out-of-range values clamp to the nearest interval on either
    /// end, so every finite value lands somewhere. NaN fails every
    /// boundary test and falls back to the first interval;
    /// [`DatasetView::bin`] screens NaN values out before lookup.
    pub fn bucket_of(&self, value: f64) -> usize {
        let mut bucket = 0;
        for (i, &boundary) in self.boundaries.iter().take(self.labels.len()).enumerate() {
            if value >= boundary {
                bucket = i;
            }
        }
        bucket
    }

    /// The interval label for `value`.
    pub fn label_of(&self, value: f64) -> &str {
        &self.labels[self.bucket_of(value)]
    }
}

/// The video-duration intervals the dashboard reports on:
/// `[0, 15, 30, 60, 120, +∞)` seconds.
pub fn duration_bins() -> BinSpec {
    BinSpec {
        boundaries: vec![0.0, 15.0, 30.0, 60.0, 120.0, f64::INFINITY],
        labels: ["0-15s", "16-30s", "31-60s", "61-120s", "120s+"]
            .into_iter()
            .map(String::from)
            .collect(),
    }
}

impl<'a> DatasetView<'a> {
    /// Assign each record in the view to a bin of `measure`.
    ///
    /// Records whose measure value is NaN are left out of the binned view
    /// entirely, the same missing-value rule the reducers apply; they
    /// contribute to no bin.
    pub fn bin(&self, measure: Measure, spec: &BinSpec) -> BinnedView<'a> {
        let records = self.dataset().records();
        let mut rows = Vec::with_capacity(self.len());
        let mut bins = Vec::with_capacity(self.len());
        for &row in self.row_indices() {
            let value = measure.value_of(&records[row]);
            if value.is_nan() {
                continue;
            }
            rows.push(row);
            bins.push(spec.bucket_of(value));
        }
        BinnedView {
            view: DatasetView::from_rows(self.dataset(), rows),
            bins,
            labels: spec.labels().to_vec(),
        }
    }
}

/// A view whose records carry a bin label, ready for per-bin aggregation.
///
/// Labels are never stored on records; they live here and are recomputed
/// whenever a view is binned.
#[derive(Debug, Clone, PartialEq)]
pub struct BinnedView<'a> {
    view: DatasetView<'a>,
    bins: Vec<usize>,
    labels: Vec<String>,
}

impl<'a> BinnedView<'a> {
    pub fn len(&self) -> usize {
        self.view.len()
    }

    pub fn is_empty(&self) -> bool {
        self.view.is_empty()
    }

    /// All labels of the originating spec, in interval order, whether or
    /// not any record fell into them.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The records together with their bin labels, in view order.
    pub fn labeled_records(&self) -> impl Iterator<Item = (&'a Record, &str)> + '_ {
        self.view
            .records()
            .zip(self.bins.iter())
            .map(|(record, &bin)| (record, self.labels[bin].as_str()))
    }

    /// Group by bin label and reduce `measure` with `reducer`.
    ///
    /// Only labels with at least one record produce a row; backfill the
    /// full axis with `reindex(spec.labels())` when empty bins should stay
    /// visible.
    pub fn aggregate(&self, measure: Measure, reducer: Reducer) -> AggTable {
        group_reduce(
            self.view
                .records()
                .zip(self.bins.iter())
                .map(|(record, &bin)| (self.labels[bin].clone(), measure.value_of(record))),
            reducer,
        )
    }
}
