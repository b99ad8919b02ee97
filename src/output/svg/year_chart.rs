//! Publications-per-year bar chart.

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::config::ChartConfig;
use crate::output::html_escape;
use crate::record::PublicationRecord;

use super::element::{Bar, Baseline, SvgElement, TextAnchor, TextLabel};

/// Fallback text when no record has a coercible year.
pub const NO_YEAR_DATA_MESSAGE: &str = "No year data found.";

// Fixed margins reserve room for axis labels and the caption.
const MARGIN_LEFT: f64 = 44.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 18.0;
const MARGIN_BOTTOM: f64 = 46.0;

/// Central share of each year slot occupied by the bar.
const BAR_SLOT_SHARE: f64 = 0.7;
const BAR_CORNER_RADIUS: f64 = 6.0;
const LABEL_FONT_SIZE: f64 = 12.0;

/// Per-year publication counts rendered as equally spaced bars.
///
/// Counts are rebuilt from scratch for every chart value; nothing is cached
/// between renders. The chart always reflects the full record set — the
/// list filter never reaches it.
#[derive(Debug)]
pub struct YearChart {
    caption: String,
    width: f64,
    height: f64,
    counts: BTreeMap<i32, usize>,
}

impl YearChart {
    /// Aggregate records by coerced year. Records without a valid year are
    /// silently excluded (they still appear in the list view).
    #[must_use]
    pub fn from_records(records: &[PublicationRecord], options: &ChartConfig) -> Self {
        let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
        for record in records {
            if let Some(year) = record.year {
                *counts.entry(year).or_insert(0) += 1;
            }
        }

        Self {
            caption: options.caption.clone(),
            width: options.width,
            height: options.height,
            counts,
        }
    }

    /// Year -> count mapping, ascending by year.
    #[must_use]
    pub const fn counts(&self) -> &BTreeMap<i32, usize> {
        &self.counts
    }

    #[must_use]
    pub fn has_data(&self) -> bool {
        !self.counts.is_empty()
    }
}

impl SvgElement for YearChart {
    #[allow(clippy::cast_precision_loss)] // Acceptable for chart rendering
    fn render(&self) -> String {
        let mut output = String::new();

        let _ = writeln!(
            output,
            r#"<svg viewBox="0 0 {} {}" xmlns="http://www.w3.org/2000/svg" role="img">"#,
            self.width, self.height
        );

        let escaped_caption = html_escape(&self.caption);
        let _ = writeln!(output, r"    <title>{escaped_caption}</title>");

        if self.counts.is_empty() {
            let _ = writeln!(
                output,
                r#"    <text x="10" y="30" fill="var(--color-text-muted)" font-size="14">{NO_YEAR_DATA_MESSAGE}</text>"#
            );
            output.push_str("</svg>");
            return output;
        }

        let inner_width = self.width - MARGIN_LEFT - MARGIN_RIGHT;
        let inner_height = self.height - MARGIN_TOP - MARGIN_BOTTOM;
        let baseline_y = MARGIN_TOP + inner_height;

        // counts() values are always >= 1
        let max_count = self.counts.values().copied().fold(1, usize::max);

        let baseline = Baseline {
            x: MARGIN_LEFT,
            y: baseline_y,
            length: inner_width,
            color: "var(--color-chart-baseline)".to_string(),
        };
        let _ = writeln!(output, "    {}", baseline.render());

        // Each distinct year is one equally spaced category, gaps between
        // years notwithstanding.
        let slot_width = inner_width / self.counts.len() as f64;
        let bar_width = slot_width * BAR_SLOT_SHARE;
        let side_gap = slot_width * ((1.0 - BAR_SLOT_SHARE) / 2.0);

        for (i, (&year, &count)) in self.counts.iter().enumerate() {
            let x = (slot_width).mul_add(i as f64, MARGIN_LEFT) + side_gap;
            let bar_height = (count as f64 / max_count as f64) * inner_height;
            let y_top = MARGIN_TOP + (inner_height - bar_height);

            let bar = Bar {
                x,
                y: y_top,
                width: bar_width,
                height: bar_height,
                corner_radius: BAR_CORNER_RADIUS,
                fill: "var(--color-chart-bar)".to_string(),
                stroke: "var(--color-chart-bar-stroke)".to_string(),
                label: year.to_string(),
                value: count,
            };
            let _ = writeln!(output, "    {}", bar.render());

            // Count centered above the bar
            let count_label = TextLabel {
                x: x + bar_width / 2.0,
                y: y_top - 6.0,
                text: count.to_string(),
                anchor: TextAnchor::Middle,
                font_size: LABEL_FONT_SIZE,
                color: "var(--color-text)".to_string(),
            };
            let _ = writeln!(output, "    {}", count_label.render());

            // Year centered below the baseline
            let year_label = TextLabel {
                x: x + bar_width / 2.0,
                y: baseline_y + 24.0,
                text: year.to_string(),
                anchor: TextAnchor::Middle,
                font_size: LABEL_FONT_SIZE,
                color: "var(--color-text-muted)".to_string(),
            };
            let _ = writeln!(output, "    {}", year_label.render());
        }

        let caption = TextLabel {
            x: MARGIN_LEFT,
            y: 14.0,
            text: self.caption.clone(),
            anchor: TextAnchor::Start,
            font_size: LABEL_FONT_SIZE,
            color: "var(--color-text-muted)".to_string(),
        };
        let _ = writeln!(output, "    {}", caption.render());

        output.push_str("</svg>");
        output
    }
}

#[cfg(test)]
#[path = "year_chart_tests.rs"]
mod tests;
