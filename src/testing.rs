//! Testing utilities for analytics sessions.
//!
//! This module ships with the library so downstream consumers can test
//! their own dashboards against known data. It includes:
//!
//! - **Fixtures**: a hand-checkable sample dataset, in memory
//!   ([`sample_dataset`]) and in wire form ([`SAMPLE_CSV`],
//!   [`sample_csv_file`])
//! - **Assertions**: tolerance-aware comparisons for reduced tables
//!   ([`assert_table_eq`], [`assert_reindexed_eq`], [`assert_close`])
//!
//! # Quick Start
//!
//! ```
//! use trendlens::testing::*;
//! use trendlens::{Dimension, Measure, Reducer, Selection};
//!
//! let dataset = sample_dataset();
//! let view = dataset.filter(&Selection::new().with(Dimension::Country, ["US"]));
//! let monthly = view.aggregate(Dimension::YearMonth, Measure::Views, Reducer::Sum);
//! assert_table_eq(&monthly, &[("2025-01", 6000.0), ("2025-03", 500.0)]);
//! ```

pub mod assertions;
pub mod fixtures;

pub use assertions::*;
pub use fixtures::*;
