use crate::config::ChartConfig;
use crate::record::PublicationRecord;

use super::*;

fn dated(year: i32) -> PublicationRecord {
    PublicationRecord {
        year: Some(year),
        ..Default::default()
    }
}

fn undated() -> PublicationRecord {
    PublicationRecord::default()
}

fn chart(records: &[PublicationRecord]) -> YearChart {
    YearChart::from_records(records, &ChartConfig::default())
}

#[test]
fn aggregates_counts_per_year_ascending() {
    let records = vec![dated(2020), dated(2020), dated(2021)];
    let chart = chart(&records);

    let entries: Vec<(i32, usize)> = chart.counts().iter().map(|(&y, &c)| (y, c)).collect();
    assert_eq!(entries, vec![(2020, 2), (2021, 1)]);
}

#[test]
fn invalid_years_are_excluded_from_aggregation() {
    let records = vec![dated(2022), undated(), undated()];
    let chart = chart(&records);

    assert_eq!(chart.counts().len(), 1);
    assert_eq!(chart.counts()[&2022], 1);
}

#[test]
fn year_gaps_stay_equally_spaced_categories() {
    // 1998 and 2024 are adjacent categories, not 26 slots apart
    let records = vec![dated(1998), dated(2024)];
    let svg = chart(&records).render();

    assert_eq!(svg.matches("<rect").count(), 2);
    let first = svg.find(">1998</text>").unwrap();
    let second = svg.find(">2024</text>").unwrap();
    assert!(first < second, "category order is ascending by year");
}

#[test]
fn max_count_fills_inner_height_and_half_count_is_half() {
    // Default canvas 860x220, margins 18 top / 46 bottom: inner height 156
    let records = vec![dated(2020), dated(2020), dated(2021)];
    let svg = chart(&records).render();

    assert!(svg.contains(r#"height="156""#), "max bar fills plot height");
    assert!(svg.contains(r#"height="78""#), "half count scales to half");
}

#[test]
fn renders_baseline_count_and_year_labels() {
    let records = vec![dated(2019)];
    let svg = chart(&records).render();

    // Baseline sits at the bottom of the plot area (18 + 156)
    assert!(svg.contains(r#"y1="174""#));
    // Count above the bar, year below the baseline (174 + 24)
    assert!(svg.contains(">1</text>"));
    assert!(svg.contains(r#"y="198""#));
    assert!(svg.contains(">2019</text>"));
}

#[test]
fn caption_rendered_top_left() {
    let records = vec![dated(2020)];
    let svg = chart(&records).render();

    assert!(svg.contains(r#"<text x="44" y="14""#));
    assert!(svg.contains(">Publications per year</text>"));
}

#[test]
fn empty_input_renders_single_fallback_text_and_no_bars() {
    let svg = chart(&[]).render();

    assert_eq!(svg.matches("<rect").count(), 0);
    assert_eq!(svg.matches("<text").count(), 1);
    assert!(svg.contains(NO_YEAR_DATA_MESSAGE));
}

#[test]
fn all_invalid_years_renders_fallback() {
    let records = vec![undated(), undated()];
    let chart = chart(&records);

    assert!(!chart.has_data());
    let svg = chart.render();
    assert_eq!(svg.matches("<rect").count(), 0);
    assert!(svg.contains(NO_YEAR_DATA_MESSAGE));
}

#[test]
fn viewbox_follows_configured_dimensions() {
    let options = ChartConfig {
        width: 600.0,
        height: 300.0,
        ..Default::default()
    };
    let chart = YearChart::from_records(&[dated(2020)], &options);

    assert!(chart.render().contains(r#"viewBox="0 0 600 300""#));
}

#[test]
fn caption_is_escaped() {
    let options = ChartConfig {
        caption: "Pubs <& friends>".to_string(),
        ..Default::default()
    };
    let chart = YearChart::from_records(&[dated(2020)], &options);
    let svg = chart.render();

    assert!(svg.contains("Pubs &lt;&amp; friends&gt;"));
    assert!(!svg.contains("<& friends>"));
}

#[test]
fn rebuilt_from_scratch_each_time() {
    let records = vec![dated(2020)];
    let first = chart(&records).render();
    let second = chart(&records).render();
    assert_eq!(first, second);
}
