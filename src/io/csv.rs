//! CSV ingestion into a typed [`Dataset`].
//!
//! Rows are deserialized with Serde by header name, so column order in the
//! source is irrelevant and extra columns are ignored. The publish date is
//! parsed separately from row decoding so a bad date is reported as its
//! own error, with the row that carried it.

use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::debug;

use crate::dataset::Dataset;
use crate::error::LoadError;
use crate::record::Record;

/// The wire shape of one source row. Dates stay text here; `Record`
/// carries the parsed form.
#[derive(Debug, Deserialize)]
struct RawRecord {
    row_id: u64,
    country: String,
    platform: String,
    device_type: String,
    category: String,
    region: String,
    publish_date_approx: String,
    upload_hour: u8,
    duration_sec: f64,
    views: u64,
    engagement_rate: f64,
    engagement_total: f64,
}

/// Read a CSV source into a [`Dataset`].
///
/// The first row must be a header naming the columns; a header-only file
/// loads as an empty dataset. The whole load is atomic: any undecodable
/// row or unparseable `publish_date_approx` fails the call and nothing is
/// returned. Row numbers in errors are 1-based over data rows, excluding
/// the header.
///
/// # Errors
/// [`LoadError::SourceNotFound`] if `path` does not exist,
/// [`LoadError::Io`] for any other open failure,
/// [`LoadError::Malformed`] for a row that does not decode, and
/// [`LoadError::MalformedDate`] for a date not in `YYYY-MM-DD` form.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            LoadError::SourceNotFound {
                path: path.to_path_buf(),
                source,
            }
        } else {
            LoadError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(file);

    let mut records = Vec::new();
    for (i, raw) in reader.deserialize::<RawRecord>().enumerate() {
        let row = i + 1;
        let raw = raw.map_err(|source| LoadError::Malformed { row, source })?;
        let publish_date = NaiveDate::parse_from_str(&raw.publish_date_approx, "%Y-%m-%d")
            .map_err(|_| LoadError::MalformedDate {
                row,
                value: raw.publish_date_approx.clone(),
            })?;
        records.push(Record::new(
            raw.row_id,
            raw.country,
            raw.platform,
            raw.device_type,
            raw.category,
            raw.region,
            publish_date,
            raw.upload_hour,
            raw.duration_sec,
            raw.views,
            raw.engagement_rate,
            raw.engagement_total,
        ));
    }
    debug!("loaded {} records from {}", records.len(), path.display());
    Ok(Dataset::from_records(records))
}
