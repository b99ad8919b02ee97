//! Card list rendering: filter, sort, and project records into markup.

use std::cmp::Ordering;
use std::fmt::Write;

use crate::config::ListConfig;
use crate::record::PublicationRecord;

use super::html_escape;

/// Status line when the active filter matches nothing.
pub const NO_MATCH_MESSAGE: &str = "No publications match this filter.";

/// Alt text for records without a title.
const GENERIC_THUMB_ALT: &str = "Publication thumbnail";

/// Status line for a non-empty filtered view.
#[must_use]
pub fn status_message(count: usize) -> String {
    format!("Showing {count} publication(s).")
}

/// Type filter for the list view. The chart never sees it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Kind(String),
}

impl TypeFilter {
    /// The literal `all` keeps everything; any other value is an exact
    /// match against the record's `type` field, no normalization.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value == "all" {
            Self::All
        } else {
            Self::Kind(value.to_string())
        }
    }

    #[must_use]
    pub fn matches(&self, record: &PublicationRecord) -> bool {
        match self {
            Self::All => true,
            // A record without a type never matches a specific filter.
            Self::Kind(kind) => record.kind.as_deref() == Some(kind),
        }
    }
}

/// Renders the filtered, sorted card list and its status line.
///
/// Both output regions are cleared and rebuilt on every call, so repeated
/// renders with identical inputs produce identical content.
#[derive(Debug)]
pub struct ListRenderer<'a> {
    options: &'a ListConfig,
}

impl<'a> ListRenderer<'a> {
    #[must_use]
    pub const fn new(options: &'a ListConfig) -> Self {
        Self { options }
    }

    /// Clear and rebuild the status and list regions.
    pub fn render(
        &self,
        records: &[PublicationRecord],
        filter: &TypeFilter,
        status_out: &mut String,
        list_out: &mut String,
    ) {
        status_out.clear();
        list_out.clear();

        let mut filtered: Vec<&PublicationRecord> =
            records.iter().filter(|r| filter.matches(r)).collect();

        if filtered.is_empty() {
            status_out.push_str(NO_MATCH_MESSAGE);
            return;
        }

        status_out.push_str(&status_message(filtered.len()));

        filtered.sort_by(|a, b| compare_records(a, b));

        for record in filtered {
            self.write_card(list_out, record);
        }
    }

    fn write_card(&self, out: &mut String, record: &PublicationRecord) {
        let kind = html_escape(record.kind.as_deref().unwrap_or_default());
        let _ = writeln!(out, r#"<div class="pub-card" data-kind="{kind}">"#);

        let thumb = record
            .thumb
            .as_deref()
            .unwrap_or(&self.options.placeholder_thumb);
        let alt = record.title.as_deref().map_or_else(
            || GENERIC_THUMB_ALT.to_string(),
            |title| format!("Thumbnail for {title}"),
        );
        let _ = writeln!(
            out,
            r#"    <img class="pub-thumb" src="{}" alt="{}">"#,
            html_escape(thumb),
            html_escape(&alt)
        );

        out.push_str("    <div class=\"pub-body\">\n");

        let title = record
            .title
            .as_deref()
            .unwrap_or(&self.options.placeholder_title);
        let _ = writeln!(
            out,
            r#"        <p class="pub-title">{}</p>"#,
            html_escape(title)
        );

        let venue = record
            .venue
            .as_deref()
            .unwrap_or(&self.options.default_venue);
        out.push_str("        <div class=\"pub-meta\">\n");
        let _ = writeln!(
            out,
            r#"            <div><span class="tag">{}</span><span class="tag">{}</span></div>"#,
            html_escape(venue),
            html_escape(&record.year_label())
        );
        if !record.authors.is_empty() {
            let _ = writeln!(
                out,
                r#"            <div class="pub-authors">{}</div>"#,
                self.format_authors(&record.authors)
            );
        }
        out.push_str("        </div>\n");

        if !record.links.is_empty() {
            out.push_str("        <div class=\"pub-links\">\n");
            for link in &record.links {
                let _ = writeln!(
                    out,
                    r#"            <a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
                    html_escape(&link.url),
                    html_escape(&link.label)
                );
            }
            out.push_str("        </div>\n");
        }

        out.push_str("    </div>\n");
        out.push_str("</div>\n");
    }

    /// Comma-joined author list with emphasis on highlighted names.
    fn format_authors(&self, authors: &[String]) -> String {
        authors
            .iter()
            .map(|author| {
                let escaped = html_escape(author);
                if self.options.is_highlighted(author) {
                    format!("<strong>{escaped}</strong>")
                } else {
                    escaped
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Year descending, then title ascending.
///
/// Records without a coercible year sort after every dated record. Titles
/// compare case-insensitively on their Unicode lowercase form; records with
/// identical (year, title) pairs have no defined relative order.
fn compare_records(a: &PublicationRecord, b: &PublicationRecord) -> Ordering {
    let year_a = a.year.unwrap_or(i32::MIN);
    let year_b = b.year.unwrap_or(i32::MIN);
    year_b
        .cmp(&year_a)
        .then_with(|| title_sort_key(a).cmp(&title_sort_key(b)))
}

fn title_sort_key(record: &PublicationRecord) -> String {
    record.title.as_deref().unwrap_or_default().to_lowercase()
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
