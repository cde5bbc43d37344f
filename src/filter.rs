//! Row selection by per-dimension value sets.
//!
//! A [`Selection`] names, for any subset of the dimensions, the values a
//! record must match. Dimensions it does not name are unconstrained. The
//! constrained dimensions combine with AND; the values within one
//! dimension combine with OR. An explicitly empty value set is a real
//! constraint that matches nothing, which is exactly what a multi-select
//! control with everything unticked should produce.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::dataset::{Dataset, DatasetView};
use crate::record::{Dimension, Record};

/// An immutable description of which rows to keep.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    constraints: BTreeMap<Dimension, BTreeSet<String>>,
}

impl Selection {
    /// A selection with no constraints; matches every record.
    pub fn new() -> Self {
        Selection::default()
    }

    /// Builder form of [`select`](Selection::select).
    pub fn with<I, S>(mut self, dimension: Dimension, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select(dimension, values);
        self
    }

    /// Constrain `dimension` to the given values, replacing any previous
    /// constraint on it. Passing no values constrains it to nothing.
    pub fn select<I, S>(&mut self, dimension: Dimension, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.constraints
            .insert(dimension, values.into_iter().map(Into::into).collect());
    }

    /// Drop the constraint on `dimension`, making it unconstrained again.
    pub fn clear(&mut self, dimension: Dimension) {
        self.constraints.remove(&dimension);
    }

    /// Whether this selection constrains `dimension` at all.
    pub fn constrains(&self, dimension: Dimension) -> bool {
        self.constraints.contains_key(&dimension)
    }

    /// Whether this selection has no constraints.
    pub fn is_unconstrained(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Whether `record` satisfies every constraint.
    pub fn matches(&self, record: &Record) -> bool {
        self.constraints
            .iter()
            .all(|(dimension, allowed)| allowed.contains(dimension.value_of(record).as_ref()))
    }
}

impl Dataset {
    /// The view of rows matching `selection`, in dataset order.
    pub fn filter(&self, selection: &Selection) -> DatasetView<'_> {
        let rows: Vec<usize> = self
            .records()
            .iter()
            .enumerate()
            .filter(|(_, record)| selection.matches(record))
            .map(|(i, _)| i)
            .collect();
        debug!(
            "selection kept {} of {} records",
            rows.len(),
            self.len()
        );
        DatasetView::from_rows(self, rows)
    }
}

impl<'a> DatasetView<'a> {
    /// Narrow this view further; the result borrows the same dataset.
    pub fn filter(&self, selection: &Selection) -> DatasetView<'a> {
        let dataset = self.dataset();
        let records = dataset.records();
        let rows: Vec<usize> = self
            .row_indices()
            .iter()
            .copied()
            .filter(|&i| selection.matches(&records[i]))
            .collect();
        DatasetView::from_rows(dataset, rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_value_set_matches_nothing() {
        let record = crate::testing::fixtures::sample_records().remove(0);
        let selection = Selection::new().with(Dimension::Country, Vec::<String>::new());
        assert!(!selection.matches(&record));
    }

    #[test]
    fn unconstrained_selection_matches_everything() {
        for record in crate::testing::fixtures::sample_records() {
            assert!(Selection::new().matches(&record));
        }
    }
}
