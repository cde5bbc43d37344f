//! The materialized dataset and borrowed views over it.
//!
//! A [`Dataset`] is loaded once and never mutated; every analysis works on
//! a [`DatasetView`], a non-owning selection of rows that shares the
//! dataset's lifetime. Views are cheap to make and throw away; each filter
//! change rebuilds one from the full dataset rather than editing state.

use std::collections::BTreeSet;

use crate::record::{Dimension, Record};

/// The full, immutable collection of records for one analysis session.
///
/// Row order is file order. `row_id` uniqueness is a property of the source
/// (the loader does not deduplicate).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Wrap already-built records, preserving their order.
    pub fn from_records(records: Vec<Record>) -> Self {
        Dataset { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// A view containing every record.
    pub fn view(&self) -> DatasetView<'_> {
        DatasetView {
            dataset: self,
            rows: (0..self.records.len()).collect(),
        }
    }

    /// The distinct values of a categorical axis, sorted ascending.
    ///
    /// This is what a presentation layer feeds its multi-select controls,
    /// and what "select all" passes back into a
    /// [`Selection`](crate::Selection).
    pub fn distinct_values(&self, dimension: Dimension) -> Vec<String> {
        distinct_over(self.records.iter(), dimension)
    }
}

/// A subset of a [`Dataset`], by row index.
///
/// The view borrows the dataset; nothing is copied. An empty view is the
/// designated "no data" state: every engine maps it to empty output, so
/// callers can either short-circuit on [`is_empty`](DatasetView::is_empty)
/// or let the empties flow through.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetView<'a> {
    dataset: &'a Dataset,
    rows: Vec<usize>,
}

impl<'a> DatasetView<'a> {
    pub(crate) fn from_rows(dataset: &'a Dataset, rows: Vec<usize>) -> Self {
        DatasetView { dataset, rows }
    }

    pub(crate) fn row_indices(&self) -> &[usize] {
        &self.rows
    }

    /// The dataset this view selects from.
    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The selected records, in dataset order.
    pub fn records(&self) -> impl Iterator<Item = &'a Record> + '_ {
        let dataset = self.dataset;
        self.rows.iter().map(move |&i| &dataset.records[i])
    }

    /// The distinct values of a categorical axis within this view, sorted
    /// ascending.
    pub fn distinct_values(&self, dimension: Dimension) -> Vec<String> {
        distinct_over(self.records(), dimension)
    }
}

fn distinct_over<'r>(
    records: impl Iterator<Item = &'r Record>,
    dimension: Dimension,
) -> Vec<String> {
    let values: BTreeSet<String> = records
        .map(|r| dimension.value_of(r).into_owned())
        .collect();
    values.into_iter().collect()
}
