//! Dataset ingestion.
//!
//! One format, one entry point: [`csv::load_dataset`] reads a
//! comma-delimited source into a [`Dataset`](crate::Dataset), deriving the
//! temporal columns as it goes. Loading is all-or-nothing; see
//! [`LoadError`](crate::LoadError) for the ways it fails.

pub mod csv;

pub use self::csv::load_dataset;
