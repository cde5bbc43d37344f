use trendlens::testing::*;
use trendlens::{Dimension, Selection, report};

#[test]
fn monthly_views_sums_in_calendar_order() {
    let dataset = sample_dataset();
    let table = report::monthly_views(&dataset.view());

    let keys: Vec<&str> = table.keys().collect();
    assert_eq!(keys, vec!["2025-01", "2025-02", "2025-03"]);
    assert_table_eq(
        &table,
        &[
            ("2025-01", 11_000.0),
            ("2025-02", 19_500.0),
            ("2025-03", 9_500.0),
        ],
    );
}

#[test]
fn monthly_engagement_means_in_calendar_order() {
    let dataset = sample_dataset();
    let table = report::monthly_engagement(&dataset.view());
    assert_table_eq(
        &table,
        &[("2025-01", 0.25), ("2025-02", 0.375), ("2025-03", 0.40)],
    );
}

#[test]
fn platform_engagement_means_by_platform() {
    let dataset = sample_dataset();
    let table = report::platform_engagement(&dataset.view());

    let keys: Vec<&str> = table.keys().collect();
    assert_eq!(keys, vec!["Instagram", "TikTok", "YouTube"]);
    assert_table_eq(
        &table,
        &[
            ("Instagram", 1.55 / 3.0),
            ("TikTok", 1.05 / 4.0),
            ("YouTube", 0.7 / 3.0),
        ],
    );
}

#[test]
fn hourly_engagement_spans_all_twenty_four_hours() {
    let dataset = sample_dataset();
    let hours = report::hourly_engagement(&dataset.view());

    assert_eq!(hours.len(), 24);
    assert_eq!(hours[0].0, "0");
    assert_eq!(hours[23].0, "23");

    let lookup = |hour: &str| {
        hours
            .iter()
            .find(|(key, _)| key == hour)
            .and_then(|(_, value)| *value)
    };
    assert_close(lookup("9").expect("9am has records"), 0.25);
    assert_close(lookup("12").expect("noon has records"), 0.275);
    assert_close(lookup("6").expect("6am has records"), 0.20);
    assert_eq!(lookup("1"), None);
}

#[test]
fn category_engagement_ranks_medians_descending() {
    let dataset = sample_dataset();
    let table = report::category_engagement(&dataset.view());

    let rows = table.rows();
    assert_eq!(rows[0].0, "dance");
    assert_close(rows[0].1, 2575.0);
    assert_eq!(rows[1].0, "education");
    assert_close(rows[1].1, 1450.0);
    // comedy and music tie at 600.
    assert_close(rows[2].1, 600.0);
    assert_close(rows[3].1, 600.0);
}

#[test]
fn duration_engagement_follows_the_bin_axis() {
    let dataset = sample_dataset();
    let table = report::duration_engagement(&dataset.view());
    assert_reindexed_eq(
        &table,
        &[
            ("0-15s", Some(0.225)),
            ("16-30s", Some(0.20)),
            ("31-60s", Some(0.35)),
            ("61-120s", Some(0.45)),
            ("120s+", Some(0.30)),
        ],
    );
}

#[test]
fn weekday_engagement_spans_monday_to_sunday() {
    let dataset = sample_dataset();
    let table = report::weekday_engagement(&dataset.view());
    assert_reindexed_eq(
        &table,
        &[
            ("Monday", Some(0.225)),
            ("Tuesday", Some(0.35)),
            ("Wednesday", Some(0.30)),
            ("Thursday", None),
            ("Friday", Some(0.60)),
            ("Saturday", Some(0.35)),
            ("Sunday", Some(0.45)),
        ],
    );
}

#[test]
fn country_profiles_carry_all_three_statistics() {
    let dataset = sample_dataset();
    let profiles = report::country_profiles(&dataset.view());

    let countries: Vec<&str> = profiles.iter().map(|p| p.country.as_str()).collect();
    assert_eq!(countries, vec!["BR", "IN", "US"]);

    let br = &profiles[0];
    assert_close(br.avg_views, 3500.0);
    assert_close(br.avg_engagement_rate, 0.5);
    assert_eq!(br.video_count, 3);

    let india = &profiles[1];
    assert_close(india.avg_views, 23_000.0 / 3.0);
    assert_close(india.avg_engagement_rate, 0.25);
    assert_eq!(india.video_count, 3);

    let us = &profiles[2];
    assert_close(us.avg_views, 1625.0);
    assert_close(us.avg_engagement_rate, 0.2625);
    assert_eq!(us.video_count, 4);
}

#[test]
fn region_category_engagement_is_the_heatmap_grid() {
    let dataset = sample_dataset();
    let table = report::region_category_engagement(&dataset.view());

    assert_eq!(
        table.row_keys(),
        &["Asia", "North America", "South America"]
    );
    match table.cell("South America", "dance") {
        Some(mean) => assert_close(mean, 0.40),
        None => panic!("expected a computed cell"),
    }
    assert_eq!(table.cell("Asia", "music"), None);
}

#[test]
fn every_analysis_maps_an_empty_view_to_empty_output() {
    let dataset = sample_dataset();
    let view = dataset.filter(&Selection::new().with(Dimension::Country, Vec::<String>::new()));

    assert!(report::monthly_views(&view).is_empty());
    assert!(report::monthly_engagement(&view).is_empty());
    assert!(report::platform_engagement(&view).is_empty());
    assert!(report::hourly_engagement(&view).is_empty());
    assert!(report::category_engagement(&view).is_empty());
    assert!(report::duration_engagement(&view).is_empty());
    assert!(report::weekday_engagement(&view).is_empty());
    assert!(report::country_profiles(&view).is_empty());
    assert!(report::region_category_engagement(&view).is_empty());
}
