//! SVG generation for the per-year publication chart.
//!
//! viewBox-based scaling, CSS variable colors (dark mode via
//! `var(--color-*)`), and `<title>` elements for hover/screen readers.

mod element;
mod year_chart;

pub use element::{Bar, Baseline, SvgElement, TextAnchor, TextLabel};
pub use year_chart::{NO_YEAR_DATA_MESSAGE, YearChart};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
