//! Primitive SVG elements: bars, the baseline, and text labels.

use std::fmt;

use crate::output::html_escape;

/// Base trait for SVG elements.
pub trait SvgElement {
    /// Render the element to an SVG string.
    fn render(&self) -> String;
}

/// Text anchor position for labels.
#[derive(Debug, Clone, Copy, Default)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Middle => write!(f, "middle"),
            Self::End => write!(f, "end"),
        }
    }
}

/// A single rounded bar in the year chart.
#[derive(Debug, Clone)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
    /// CSS fill value, e.g. `var(--color-chart-bar)`.
    pub fill: String,
    pub stroke: String,
    pub label: String,
    pub value: usize,
}

impl SvgElement for Bar {
    fn render(&self) -> String {
        let escaped_label = html_escape(&self.label);
        // <title> provides the hover tooltip and an accessible name
        format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{r}" ry="{r}" fill="{}" stroke="{}">
    <title>{escaped_label}: {}</title>
</rect>"#,
            self.x,
            self.y,
            self.width,
            self.height,
            self.fill,
            self.stroke,
            self.value,
            r = self.corner_radius,
        )
    }
}

/// Horizontal baseline at the bottom of the plot area.
#[derive(Debug, Clone)]
pub struct Baseline {
    pub x: f64,
    pub y: f64,
    pub length: f64,
    pub color: String,
}

impl SvgElement for Baseline {
    fn render(&self) -> String {
        format!(
            r#"<line x1="{}" y1="{y}" x2="{}" y2="{y}" stroke="{}" stroke-width="1"/>"#,
            self.x,
            self.x + self.length,
            self.color,
            y = self.y,
        )
    }
}

/// A positioned text label.
#[derive(Debug, Clone)]
pub struct TextLabel {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub anchor: TextAnchor,
    pub font_size: f64,
    pub color: String,
}

impl SvgElement for TextLabel {
    fn render(&self) -> String {
        format!(
            r#"<text x="{}" y="{}" text-anchor="{}" fill="{}" font-size="{}">{}</text>"#,
            self.x,
            self.y,
            self.anchor,
            self.color,
            self.font_size,
            html_escape(&self.text),
        )
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
