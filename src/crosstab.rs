//! Two-dimensional pivot of a reduced measure.
//!
//! [`DatasetView::crosstab`] groups records by a pair of dimensions and
//! reduces one measure per (row, column) combination. Cells are
//! `Option<f64>` so a combination with no records stays distinguishable
//! from one that reduced to 0.0.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::aggregate::Reducer;
use crate::dataset::DatasetView;
use crate::record::{Dimension, Measure};

/// A dense pivot table with ascending-sorted axes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrossTab {
    row_keys: Vec<String>,
    col_keys: Vec<String>,
    /// Row-major, `row_keys.len() * col_keys.len()` cells.
    cells: Vec<Option<f64>>,
}

impl CrossTab {
    pub fn row_keys(&self) -> &[String] {
        &self.row_keys
    }

    pub fn col_keys(&self) -> &[String] {
        &self.col_keys
    }

    pub fn cells(&self) -> &[Option<f64>] {
        &self.cells
    }

    /// The reduced value at (`row_key`, `col_key`); `None` when the
    /// combination is absent, whether the keys are unknown or simply met
    /// no records together.
    pub fn cell(&self, row_key: &str, col_key: &str) -> Option<f64> {
        let i = self.row_keys.iter().position(|k| k == row_key)?;
        let j = self.col_keys.iter().position(|k| k == col_key)?;
        self.cells[i * self.col_keys.len() + j]
    }

    /// Rows in axis order, each paired with its row key.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[Option<f64>])> {
        self.row_keys
            .iter()
            .zip(self.cells.chunks(self.col_keys.len().max(1)))
            .map(|(key, cells)| (key.as_str(), cells))
    }

    /// Whether the table has no usable grid. This is the designated
    /// "insufficient data" state; an empty view always produces it.
    pub fn is_empty(&self) -> bool {
        self.row_keys.is_empty() || self.col_keys.is_empty()
    }
}

impl<'a> DatasetView<'a> {
    /// Mean-of-measure pivot over `row` and `col`, the common dashboard
    /// case.
    pub fn crosstab(&self, row: Dimension, col: Dimension, measure: Measure) -> CrossTab {
        self.crosstab_with(row, col, measure, Reducer::Mean)
    }

    /// Pivot over `row` and `col` with an explicit reducer per cell.
    pub fn crosstab_with(
        &self,
        row: Dimension,
        col: Dimension,
        measure: Measure,
        reducer: Reducer,
    ) -> CrossTab {
        let mut groups: BTreeMap<String, BTreeMap<String, Vec<f64>>> = BTreeMap::new();
        let mut col_keys: BTreeSet<String> = BTreeSet::new();
        for record in self.records() {
            let row_key = row.value_of(record).into_owned();
            let col_key = col.value_of(record).into_owned();
            col_keys.insert(col_key.clone());
            groups
                .entry(row_key)
                .or_default()
                .entry(col_key)
                .or_default()
                .push(measure.value_of(record));
        }

        let col_keys: Vec<String> = col_keys.into_iter().collect();
        let mut row_keys = Vec::with_capacity(groups.len());
        let mut cells = Vec::with_capacity(groups.len() * col_keys.len());
        for (row_key, columns) in groups {
            for col_key in &col_keys {
                cells.push(
                    columns
                        .get(col_key.as_str())
                        .map(|values| reducer.reduce(values)),
                );
            }
            row_keys.push(row_key);
        }
        CrossTab {
            row_keys,
            col_keys,
            cells,
        }
    }
}
