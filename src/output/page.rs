//! Host page assembly: region markers, filter control, full page rendering.

use std::fmt::Write;
use std::fs;
use std::path::Path;

use indexmap::IndexSet;

use crate::config::Config;
use crate::error::{PubPageError, Result};
use crate::record::PublicationRecord;

use super::html_escape;
use super::list::{ListRenderer, TypeFilter};
use super::page_template::DEFAULT_TEMPLATE;
use super::svg::{SvgElement, YearChart};

/// Region markers every host template must carry.
pub const REQUIRED_REGIONS: [&str; 4] = ["status", "filter", "list", "chart"];

/// Rendered content for each output region of the host page.
#[derive(Debug, Default)]
pub struct PageRegions {
    pub title: String,
    pub status: String,
    pub filter: String,
    pub list: String,
    pub chart: String,
}

/// A host page with named region markers (`<!-- region:NAME -->`).
#[derive(Debug)]
pub struct PageTemplate {
    template: String,
}

impl PageTemplate {
    /// The built-in template; carries all required regions.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
        }
    }

    /// Load a custom host template.
    ///
    /// # Errors
    /// Returns an IO error if the file cannot be read. Marker presence is
    /// checked at instantiation time.
    pub fn from_file(path: &Path) -> Result<Self> {
        Ok(Self {
            template: fs::read_to_string(path)?,
        })
    }

    fn marker(region: &str) -> String {
        format!("<!-- region:{region} -->")
    }

    /// Substitute region content into the template.
    ///
    /// A required marker missing from the template is an integration bug in
    /// the host page, not a data problem.
    ///
    /// # Errors
    /// Returns `MissingRegion` naming the first absent required marker.
    pub fn instantiate(&self, regions: &PageRegions) -> Result<String> {
        let substitutions: [(&'static str, &String); 4] = [
            ("status", &regions.status),
            ("filter", &regions.filter),
            ("list", &regions.list),
            ("chart", &regions.chart),
        ];

        let mut page = self.template.clone();
        for (region, content) in substitutions {
            let marker = Self::marker(region);
            if !page.contains(&marker) {
                return Err(PubPageError::MissingRegion { region });
            }
            page = page.replace(&marker, content);
        }

        // Title is optional in custom templates
        Ok(page.replace(&Self::marker("title"), &regions.title))
    }
}

/// Build the `<select>` filter control: the literal `all` plus the distinct
/// record types in order of first appearance.
#[must_use]
pub fn render_filter_control(records: &[PublicationRecord], initial: &TypeFilter) -> String {
    let kinds: IndexSet<&str> = records.iter().filter_map(|r| r.kind.as_deref()).collect();

    let mut out = String::from("<select id=\"pub-filter\">\n");
    let all_selected = if *initial == TypeFilter::All {
        " selected"
    } else {
        ""
    };
    let _ = writeln!(out, "    <option value=\"all\"{all_selected}>All types</option>");

    for kind in kinds {
        let selected = if *initial == TypeFilter::Kind(kind.to_string()) {
            " selected"
        } else {
            ""
        };
        let escaped = html_escape(kind);
        let _ = writeln!(out, "    <option value=\"{escaped}\"{selected}>{escaped}</option>");
    }

    out.push_str("</select>");
    out
}

/// Render the complete page: status line, filter control, card list, and
/// the per-year chart (always unfiltered).
///
/// # Errors
/// Returns an error if a custom template cannot be read or misses a
/// required region marker.
pub fn render_page(
    records: &[PublicationRecord],
    config: &Config,
    filter: &TypeFilter,
) -> Result<String> {
    let template = match &config.page.template {
        Some(path) => PageTemplate::from_file(path)?,
        None => PageTemplate::builtin(),
    };

    let renderer = ListRenderer::new(&config.list);
    let mut status = String::new();
    let mut list = String::new();
    renderer.render(records, filter, &mut status, &mut list);

    let chart = YearChart::from_records(records, &config.chart);

    let regions = PageRegions {
        title: html_escape(&config.page.title),
        status,
        filter: render_filter_control(records, filter),
        list,
        chart: chart.render(),
    };

    template.instantiate(&regions)
}

#[cfg(test)]
#[path = "page_tests.rs"]
mod tests;
