//! Error types raised while bringing a dataset into memory.
//!
//! Every variant here is fatal for the analysis session: the dataset is
//! loaded whole or not at all, and a failed load is only fixed by repairing
//! the source and starting over. Empty filter results and empty cross-tabs
//! are ordinary values (`DatasetView::is_empty`, `CrossTab::is_empty`), not
//! errors, so nothing downstream of a successful load can fail.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure modes of the record loader.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source path did not resolve to a readable file.
    #[error("data source '{}' was not found", path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The designated date column held a value that does not parse as
    /// `YYYY-MM-DD`. `row` is the 1-based data row (header excluded).
    #[error("data row {row}: malformed publish date '{value}' (expected YYYY-MM-DD)")]
    MalformedDate { row: usize, value: String },
    /// A row failed to decode against the fixed column schema. This covers
    /// missing columns, unparsable numeric fields, and invalid UTF-8.
    #[error("data row {row} does not match the expected schema")]
    Malformed {
        row: usize,
        #[source]
        source: csv::Error,
    },
    /// Any other I/O failure while opening or reading the source.
    #[error("failed to read data source '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Rejected [`BinSpec`](crate::BinSpec) configurations.
///
/// These surface when a spec is constructed, never while a view is being
/// binned or aggregated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BinSpecError {
    /// Fewer than two boundaries were supplied; no interval can be formed.
    #[error("bin spec needs at least two boundaries, got {0}")]
    TooFewBoundaries(usize),
    /// Boundaries must be strictly increasing (this also rejects NaN).
    #[error("bin boundaries must be strictly increasing at index {0}")]
    BoundariesNotIncreasing(usize),
    /// There must be exactly one label per interval.
    #[error("expected {expected} bin labels (one per interval), got {got}")]
    LabelCountMismatch { expected: usize, got: usize },
}
