//! # Trendlens
//!
//! An **in-memory analytics engine** for short-form video performance data.
//! Trendlens loads a static CSV export of video records once, then answers
//! filter-and-aggregate questions about it: time trends, categorical
//! comparisons, binned distributions, and two-dimensional cross-tabulations,
//! all returned as plain tables for a presentation layer to render.
//!
//! ## Key Features
//!
//! - **Load once, slice forever** - a [`Dataset`] is immutable after load;
//!   [`DatasetCache`] memoizes loads by source path
//! - **Typed records** - CSV rows deserialize into [`Record`] by header name,
//!   with temporal columns derived at load time
//! - **Set-based filtering** - [`Selection`] narrows any combination of
//!   categorical axes; unconstrained axes pass everything
//! - **Grouped reduction** - sum, mean, exact median, and count over any
//!   [`Measure`], grouped by any [`Dimension`]
//! - **Interval binning** - [`BinSpec`] buckets a numeric measure into
//!   labeled half-open intervals, ready for per-bin aggregation
//! - **Cross-tabulation** - dense pivot tables with `Option<f64>` cells, so
//!   "no data" never masquerades as zero
//! - **Canned analyses** - the [`report`] module packages the dashboard's
//!   standard charts as one-call table builders
//! - **Empty states, not errors** - an empty filter result flows through
//!   every engine as empty output
//!
//! ## Quick Start
//!
//! ```
//! use trendlens::{Dimension, Measure, Reducer, Selection};
//! use trendlens::testing::sample_dataset;
//!
//! let dataset = sample_dataset();
//!
//! // Narrow to mobile uploads from the Americas.
//! let selection = Selection::new()
//!     .with(Dimension::Region, ["North America", "South America"])
//!     .with(Dimension::DeviceType, ["mobile"]);
//! let view = dataset.filter(&selection);
//!
//! // Total views per publication month, in calendar order.
//! let monthly = view
//!     .aggregate(Dimension::YearMonth, Measure::Views, Reducer::Sum)
//!     .sorted_by_key();
//! for (month, views) in monthly.rows() {
//!     println!("{month}: {views}");
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Dataset and views
//!
//! A [`Dataset`] holds every [`Record`] from one source, in file order.
//! Analyses never touch the dataset directly; they work on a
//! [`DatasetView`], a borrowed row selection produced by
//! [`Dataset::filter`] (or [`Dataset::view`] for everything). Views are
//! recomputed from the full dataset on every filter change, so no filter
//! state accumulates anywhere.
//!
//! ### Selections
//!
//! A [`Selection`] maps dimensions to allowed value sets. Axes it does not
//! mention are unconstrained; an explicitly empty set matches nothing.
//! "Select all" is just passing the full set from
//! [`Dataset::distinct_values`]. Constraints AND across dimensions and OR
//! within one.
//!
//! ### Aggregation
//!
//! [`DatasetView::aggregate`] groups by a [`Dimension`], reduces a
//! [`Measure`] with a [`Reducer`], and returns an [`AggTable`]. Tables are
//! unordered until the caller picks an order:
//! [`sorted_by_key`](AggTable::sorted_by_key),
//! [`sorted_by_value_desc`](AggTable::sorted_by_value_desc), or
//! [`reindex`](AggTable::reindex) onto a fixed axis with `None` for absent
//! keys.
//!
//! ### Binning
//!
//! [`DatasetView::bin`] assigns each record to a labeled interval of a
//! numeric measure per a [`BinSpec`]; the resulting
//! [`BinnedView`] aggregates by bin label exactly like a dimension. The
//! domain's standard duration buckets come from [`duration_bins`].
//!
//! ### Cross-tabulation
//!
//! [`DatasetView::crosstab`] pivots two dimensions against each other and
//! reduces one measure per cell, producing a [`CrossTab`] with sorted axes
//! and `Option<f64>` cells.
//!
//! ### Loading and caching
//!
//! [`load_dataset`] reads a CSV source atomically; any malformed row or
//! date fails the whole load with a [`LoadError`]. A [`DatasetCache`]
//! wraps the loader with by-path memoization:
//!
//! ```
//! use trendlens::DatasetCache;
//! use trendlens::testing::sample_csv_file;
//!
//! # fn main() -> anyhow::Result<()> {
//! let source = sample_csv_file()?;
//! let cache = DatasetCache::new();
//!
//! let first = cache.load(source.path())?;
//! let again = cache.load(source.path())?;  // no filesystem access
//! assert_eq!(first.len(), again.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - [`record`] - the typed row plus the [`Dimension`] and [`Measure`] axes
//! - [`dataset`] - [`Dataset`] and [`DatasetView`]
//! - [`derive`] - load-time temporal derivations (year-month, weekday)
//! - [`io`] - CSV ingestion
//! - [`cache`] - by-path load memoization
//! - [`filter`] - [`Selection`] and view filtering
//! - [`aggregate`] - reducers and [`AggTable`]
//! - [`bin`] - interval binning
//! - [`crosstab`] - two-dimensional pivots
//! - [`report`] - the canned dashboard analyses
//! - [`error`] - the crate error taxonomy
//! - [`testing`] - fixtures and assertion helpers for downstream tests

pub mod aggregate;
pub mod bin;
pub mod cache;
pub mod crosstab;
pub mod dataset;
pub mod derive;
pub mod error;
pub mod filter;
pub mod io;
pub mod record;
pub mod report;
pub mod testing;

pub use aggregate::{AggTable, Reducer};
pub use bin::{BinSpec, BinnedView, duration_bins};
pub use cache::DatasetCache;
pub use crosstab::CrossTab;
pub use dataset::{Dataset, DatasetView};
pub use derive::{WEEKDAY_ORDER, weekday_name, year_month};
pub use error::{BinSpecError, LoadError};
pub use filter::Selection;
pub use io::csv::load_dataset;
pub use record::{Dimension, Measure, Record};
