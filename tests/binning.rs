use chrono::NaiveDate;
use trendlens::testing::*;
use trendlens::{BinSpec, Dataset, Dimension, Measure, Record, Reducer, Selection, duration_bins};

#[test]
fn duration_boundaries_follow_the_left_closed_convention() {
    let spec = duration_bins();
    assert_eq!(spec.label_of(15.0), "16-30s");
    assert_eq!(spec.label_of(119.9), "61-120s");
    assert_eq!(spec.label_of(1000.0), "120s+");
}

#[test]
fn binned_view_labels_every_record() {
    let dataset = sample_dataset();
    let binned = dataset.view().bin(Measure::DurationSec, &duration_bins());
    assert_eq!(binned.len(), dataset.len());

    for (record, label) in binned.labeled_records() {
        assert_eq!(duration_bins().label_of(record.duration_sec), label);
    }
}

#[test]
fn aggregates_engagement_per_duration_bin() {
    let dataset = sample_dataset();
    let view = dataset.view();
    let table = view
        .bin(Measure::DurationSec, &duration_bins())
        .aggregate(Measure::EngagementRate, Reducer::Mean);
    assert_table_eq(
        &table,
        &[
            ("0-15s", 0.225),
            ("16-30s", 0.20),
            ("31-60s", 0.35),
            ("61-120s", 0.45),
            ("120s+", 0.30),
        ],
    );
}

#[test]
fn empty_bins_are_omitted_until_reindexed() {
    let dataset = sample_dataset();
    // US durations land in four of the five bins; 61-120s stays empty.
    let view = dataset.filter(&Selection::new().with(Dimension::Country, ["US"]));
    let spec = duration_bins();
    let table = view
        .bin(Measure::DurationSec, &spec)
        .aggregate(Measure::EngagementRate, Reducer::Mean);

    assert_eq!(table.len(), 4);
    assert_eq!(table.get("61-120s"), None);

    let full_axis = table.reindex(spec.labels());
    assert_eq!(full_axis.len(), 5);
    assert_reindexed_eq(
        &full_axis,
        &[
            ("0-15s", Some(0.10)),
            ("16-30s", Some(0.20)),
            ("31-60s", Some(0.30)),
            ("61-120s", None),
            ("120s+", Some(0.45)),
        ],
    );
}

#[test]
fn custom_specs_clamp_at_both_ends() -> anyhow::Result<()> {
    let spec = BinSpec::new(vec![10.0, 20.0, 30.0], ["low", "high"])?;
    assert_eq!(spec.label_of(3.0), "low");
    assert_eq!(spec.label_of(10.0), "low");
    assert_eq!(spec.label_of(20.0), "high");
    assert_eq!(spec.label_of(500.0), "high");
    Ok(())
}

#[test]
fn missing_measure_values_are_left_out_of_the_binned_view() {
    let date = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
    let dataset = Dataset::from_records(vec![
        Record::new(1, "US", "TikTok", "mobile", "comedy", "North America", date, 9, 10.0, 1000, 0.10, 100.0),
        Record::new(2, "US", "TikTok", "mobile", "comedy", "North America", date, 9, f64::NAN, 2000, 0.20, 400.0),
    ]);

    let binned = dataset.view().bin(Measure::DurationSec, &duration_bins());
    assert_eq!(binned.len(), 1);
    let labeled: Vec<(u64, &str)> = binned
        .labeled_records()
        .map(|(record, label)| (record.row_id, label))
        .collect();
    assert_eq!(labeled, vec![(1, "0-15s")]);

    // The missing-duration record contributes to no bin, not even the first.
    let counts = binned.aggregate(Measure::Views, Reducer::Count);
    assert_table_eq(&counts, &[("0-15s", 1.0)]);
}

#[test]
fn binning_an_empty_view_yields_an_empty_table() {
    let dataset = sample_dataset();
    let view = dataset.filter(&Selection::new().with(Dimension::Platform, Vec::<String>::new()));
    let binned = view.bin(Measure::DurationSec, &duration_bins());
    assert!(binned.is_empty());
    assert!(binned.aggregate(Measure::EngagementRate, Reducer::Mean).is_empty());
}
