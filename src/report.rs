//! The canned analyses a performance dashboard draws from a filtered view.
//!
//! Each function here is one chart's data: a grouped reduction with the
//! ordering or axis backfill that chart expects, returned as a plain
//! table. Rendering is the caller's business. Every function maps an
//! empty view to its empty output, so a caller can show one "no data"
//! state instead of nine empty charts.

use serde::Serialize;

use crate::aggregate::{AggTable, Reducer};
use crate::bin::duration_bins;
use crate::crosstab::CrossTab;
use crate::dataset::DatasetView;
use crate::derive::WEEKDAY_ORDER;
use crate::record::{Dimension, Measure};

/// Upload-hour axis keys, "0" through "23", matching how
/// [`Dimension::UploadHour`] renders its group keys.
pub fn hour_order() -> Vec<String> {
    (0..24).map(|hour| hour.to_string()).collect()
}

/// Total views per publication month, ascending by month.
pub fn monthly_views(view: &DatasetView) -> AggTable {
    view.aggregate(Dimension::YearMonth, Measure::Views, Reducer::Sum)
        .sorted_by_key()
}

/// Mean engagement rate per publication month, ascending by month.
pub fn monthly_engagement(view: &DatasetView) -> AggTable {
    view.aggregate(Dimension::YearMonth, Measure::EngagementRate, Reducer::Mean)
        .sorted_by_key()
}

/// Mean engagement rate per platform, ascending by platform name.
pub fn platform_engagement(view: &DatasetView) -> AggTable {
    view.aggregate(Dimension::Platform, Measure::EngagementRate, Reducer::Mean)
        .sorted_by_key()
}

/// Mean engagement rate per upload hour, over all 24 hours; hours with no
/// records stay in the axis as `None`.
pub fn hourly_engagement(view: &DatasetView) -> Vec<(String, Option<f64>)> {
    if view.is_empty() {
        return Vec::new();
    }
    view.aggregate(Dimension::UploadHour, Measure::EngagementRate, Reducer::Mean)
        .reindex(&hour_order())
}

/// Median total engagement per content category, best first.
pub fn category_engagement(view: &DatasetView) -> AggTable {
    view.aggregate(Dimension::Category, Measure::EngagementTotal, Reducer::Median)
        .sorted_by_value_desc()
}

/// Mean engagement rate per duration bin, over the full
/// [`duration_bins`] axis; empty bins stay visible as `None`.
pub fn duration_engagement(view: &DatasetView) -> Vec<(String, Option<f64>)> {
    if view.is_empty() {
        return Vec::new();
    }
    let bins = duration_bins();
    view.bin(Measure::DurationSec, &bins)
        .aggregate(Measure::EngagementRate, Reducer::Mean)
        .reindex(bins.labels())
}

/// Mean engagement rate per publication weekday, Monday through Sunday;
/// weekdays with no records stay in the axis as `None`.
pub fn weekday_engagement(view: &DatasetView) -> Vec<(String, Option<f64>)> {
    if view.is_empty() {
        return Vec::new();
    }
    view.aggregate(
        Dimension::PublishDayOfWeek,
        Measure::EngagementRate,
        Reducer::Mean,
    )
    .reindex(&WEEKDAY_ORDER)
}

/// One country's averages and record count, the scatter-plot input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryProfile {
    pub country: String,
    pub avg_views: f64,
    pub avg_engagement_rate: f64,
    pub video_count: u64,
}

/// Per-country mean views, mean engagement rate, and record count, sorted
/// by country name.
pub fn country_profiles(view: &DatasetView) -> Vec<CountryProfile> {
    let views = view
        .aggregate(Dimension::Country, Measure::Views, Reducer::Mean)
        .sorted_by_key();
    let engagement = view.aggregate(Dimension::Country, Measure::EngagementRate, Reducer::Mean);
    let counts = view.aggregate(Dimension::Country, Measure::Views, Reducer::Count);

    views
        .rows()
        .iter()
        .map(|(country, avg_views)| CountryProfile {
            country: country.clone(),
            avg_views: *avg_views,
            avg_engagement_rate: engagement.get(country).unwrap_or(f64::NAN),
            video_count: counts.get(country).unwrap_or(0.0) as u64,
        })
        .collect()
}

/// Mean engagement rate per region and category, the heatmap input.
pub fn region_category_engagement(view: &DatasetView) -> CrossTab {
    view.crosstab(Dimension::Region, Dimension::Category, Measure::EngagementRate)
}
