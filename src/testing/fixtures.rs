//! Pre-built datasets and CSV sources for testing analyses.

use std::io::Write;

use chrono::NaiveDate;
use tempfile::NamedTempFile;

use crate::dataset::Dataset;
use crate::record::Record;

/// A small dataset that exercises every axis: three countries and
/// regions, three platforms, four categories, three months, six weekdays,
/// and durations landing in all five duration bins (including the 15s and
/// 119.9s boundary cases).
///
/// [`SAMPLE_CSV`] is the same ten rows in wire form; loading it yields
/// exactly these records.
///
/// # Example
///
/// ```
/// use trendlens::testing::sample_records;
///
/// let records = sample_records();
/// assert_eq!(records.len(), 10);
/// ```
#[must_use]
pub fn sample_records() -> Vec<Record> {
    vec![
        Record::new(1, "US", "TikTok", "mobile", "comedy", "North America", date(2025, 1, 6), 9, 12.0, 1000, 0.10, 100.0),
        Record::new(2, "US", "TikTok", "desktop", "music", "North America", date(2025, 1, 7), 12, 15.0, 3000, 0.20, 600.0),
        Record::new(3, "US", "YouTube", "mobile", "comedy", "North America", date(2025, 1, 15), 18, 45.0, 2000, 0.30, 600.0),
        Record::new(4, "BR", "TikTok", "mobile", "dance", "South America", date(2025, 1, 20), 9, 30.0, 5000, 0.40, 2000.0),
        Record::new(5, "BR", "Instagram", "tablet", "music", "South America", date(2025, 2, 4), 21, 60.0, 4000, 0.50, 2000.0),
        Record::new(6, "BR", "Instagram", "mobile", "comedy", "South America", date(2025, 2, 14), 23, 90.0, 1500, 0.60, 900.0),
        Record::new(7, "IN", "YouTube", "mobile", "education", "Asia", date(2025, 2, 10), 6, 119.9, 8000, 0.25, 2000.0),
        Record::new(8, "IN", "YouTube", "desktop", "education", "Asia", date(2025, 2, 17), 6, 150.0, 6000, 0.15, 900.0),
        Record::new(9, "IN", "TikTok", "mobile", "dance", "Asia", date(2025, 3, 1), 12, 14.9, 9000, 0.35, 3150.0),
        Record::new(10, "US", "Instagram", "mobile", "music", "North America", date(2025, 3, 2), 0, 200.0, 500, 0.45, 225.0),
    ]
}

/// [`sample_records`] wrapped as a [`Dataset`].
#[must_use]
pub fn sample_dataset() -> Dataset {
    Dataset::from_records(sample_records())
}

/// The wire form of [`sample_records`], header included.
pub const SAMPLE_CSV: &str = "\
row_id,country,platform,device_type,category,region,publish_date_approx,upload_hour,duration_sec,views,engagement_rate,engagement_total
1,US,TikTok,mobile,comedy,North America,2025-01-06,9,12,1000,0.10,100
2,US,TikTok,desktop,music,North America,2025-01-07,12,15,3000,0.20,600
3,US,YouTube,mobile,comedy,North America,2025-01-15,18,45,2000,0.30,600
4,BR,TikTok,mobile,dance,South America,2025-01-20,9,30,5000,0.40,2000
5,BR,Instagram,tablet,music,South America,2025-02-04,21,60,4000,0.50,2000
6,BR,Instagram,mobile,comedy,South America,2025-02-14,23,90,1500,0.60,900
7,IN,YouTube,mobile,education,Asia,2025-02-10,6,119.9,8000,0.25,2000
8,IN,YouTube,desktop,education,Asia,2025-02-17,6,150,6000,0.15,900
9,IN,TikTok,mobile,dance,Asia,2025-03-01,12,14.9,9000,0.35,3150
10,US,Instagram,mobile,music,North America,2025-03-02,0,200,500,0.45,225
";

/// Write `contents` to a fresh temporary file and hand it back; the file
/// is deleted when the handle drops.
pub fn csv_file(contents: &str) -> std::io::Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(file)
}

/// [`SAMPLE_CSV`] on disk, for exercising the loader and the cache.
pub fn sample_csv_file() -> std::io::Result<NamedTempFile> {
    csv_file(SAMPLE_CSV)
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture date is valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Dimension;

    #[test]
    fn every_duration_bin_is_populated() {
        let bins = crate::bin::duration_bins();
        let records = sample_records();
        for label in bins.labels() {
            assert!(
                records
                    .iter()
                    .any(|r| bins.label_of(r.duration_sec) == label),
                "no fixture record in bin {label}"
            );
        }
    }

    #[test]
    fn fixture_spans_three_months() {
        let months = sample_dataset().distinct_values(Dimension::YearMonth);
        assert_eq!(months, vec!["2025-01", "2025-02", "2025-03"]);
    }
}
