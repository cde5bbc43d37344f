//! The typed dataset row and the axes it exposes to the engines.
//!
//! [`Record`] is one video's metadata and performance metrics, immutable
//! once loaded. [`Dimension`] names every categorical axis a caller can
//! filter or group by; [`Measure`] names every numeric field a caller can
//! reduce or bin. The axes are closed enums, so the engine contracts stay
//! fixed and explicit; there is no string-keyed column access.

use std::borrow::Cow;
use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::derive;

/// One row of the source dataset.
///
/// The two trailing fields are derived from `publish_date_approx` exactly
/// once, at load time, by [`Record::new`]; they are never recomputed per
/// filter. Numeric ranges (hour in [0,23], rate in [0,1]) are documented
/// expectations, not enforced; the loader rejects nothing but malformed
/// values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub row_id: u64,
    pub country: String,
    pub platform: String,
    pub device_type: String,
    pub category: String,
    pub region: String,
    pub publish_date_approx: NaiveDate,
    pub upload_hour: u8,
    pub duration_sec: f64,
    pub views: u64,
    pub engagement_rate: f64,
    pub engagement_total: f64,
    /// Derived: `publish_date_approx` truncated to "YYYY-MM".
    pub year_month: String,
    /// Derived: full English weekday name of `publish_date_approx`.
    pub publish_dayofweek: String,
}

impl Record {
    /// Build a record from raw row values, populating the derived columns.
    ///
    /// This is the only place the derived columns are computed; the loader
    /// and test fixtures both construct records through it.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        row_id: u64,
        country: impl Into<String>,
        platform: impl Into<String>,
        device_type: impl Into<String>,
        category: impl Into<String>,
        region: impl Into<String>,
        publish_date_approx: NaiveDate,
        upload_hour: u8,
        duration_sec: f64,
        views: u64,
        engagement_rate: f64,
        engagement_total: f64,
    ) -> Self {
        Record {
            row_id,
            country: country.into(),
            platform: platform.into(),
            device_type: device_type.into(),
            category: category.into(),
            region: region.into(),
            publish_date_approx,
            upload_hour,
            duration_sec,
            views,
            engagement_rate,
            engagement_total,
            year_month: derive::year_month(publish_date_approx),
            publish_dayofweek: derive::weekday_name(publish_date_approx).to_string(),
        }
    }
}

/// A categorical axis: usable as a filter predicate and as a grouping key.
///
/// The first five variants are raw columns; the last three are discrete
/// axes derived at load time (`UploadHour` keys render as plain decimal
/// strings, `"0"` through `"23"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Dimension {
    Country,
    Platform,
    DeviceType,
    Category,
    Region,
    YearMonth,
    PublishDayOfWeek,
    UploadHour,
}

impl Dimension {
    /// Every categorical axis, in column order.
    pub const ALL: [Dimension; 8] = [
        Dimension::Country,
        Dimension::Platform,
        Dimension::DeviceType,
        Dimension::Category,
        Dimension::Region,
        Dimension::YearMonth,
        Dimension::PublishDayOfWeek,
        Dimension::UploadHour,
    ];

    /// The record's value along this axis.
    pub fn value_of<'r>(&self, record: &'r Record) -> Cow<'r, str> {
        match self {
            Dimension::Country => Cow::Borrowed(record.country.as_str()),
            Dimension::Platform => Cow::Borrowed(record.platform.as_str()),
            Dimension::DeviceType => Cow::Borrowed(record.device_type.as_str()),
            Dimension::Category => Cow::Borrowed(record.category.as_str()),
            Dimension::Region => Cow::Borrowed(record.region.as_str()),
            Dimension::YearMonth => Cow::Borrowed(record.year_month.as_str()),
            Dimension::PublishDayOfWeek => Cow::Borrowed(record.publish_dayofweek.as_str()),
            Dimension::UploadHour => Cow::Owned(record.upload_hour.to_string()),
        }
    }

    /// The source column name for this axis.
    pub fn column(&self) -> &'static str {
        match self {
            Dimension::Country => "country",
            Dimension::Platform => "platform",
            Dimension::DeviceType => "device_type",
            Dimension::Category => "category",
            Dimension::Region => "region",
            Dimension::YearMonth => "year_month",
            Dimension::PublishDayOfWeek => "publish_dayofweek",
            Dimension::UploadHour => "upload_hour",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// A numeric field: usable as an aggregation measure and for binning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Measure {
    Views,
    EngagementRate,
    EngagementTotal,
    DurationSec,
    UploadHour,
}

impl Measure {
    /// The record's value for this measure, widened to `f64`.
    pub fn value_of(&self, record: &Record) -> f64 {
        match self {
            Measure::Views => record.views as f64,
            Measure::EngagementRate => record.engagement_rate,
            Measure::EngagementTotal => record.engagement_total,
            Measure::DurationSec => record.duration_sec,
            Measure::UploadHour => f64::from(record.upload_hour),
        }
    }

    /// The source column name for this measure.
    pub fn column(&self) -> &'static str {
        match self {
            Measure::Views => "views",
            Measure::EngagementRate => "engagement_rate",
            Measure::EngagementTotal => "engagement_total",
            Measure::DurationSec => "duration_sec",
            Measure::UploadHour => "upload_hour",
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}
