//! Lenient projection of publication records from untrusted JSON.
//!
//! Every field is optional with a documented fallback; malformed values are
//! recovered locally instead of failing the whole document ("validation at
//! the point of use"). Only the top-level array shape is enforced, by the
//! loader.

use serde_json::Value;

/// One external link attached to a publication (paper PDF, code, slides).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicationLink {
    pub url: String,
    pub label: String,
}

/// A single publication entry.
///
/// Field fallbacks:
/// - `title`: absent/empty/non-string becomes `None`, rendered with the
///   configured placeholder.
/// - `year`: coerced from a JSON number or numeric string; failures become
///   `None` (excluded from the chart, shown in the list with an empty tag).
/// - `venue`: `None` renders as the configured generic label.
/// - `authors`: non-string entries are dropped.
/// - `kind` (JSON `type`): filter key, exact match only.
/// - `thumb`: `None` renders as the configured placeholder image.
/// - `links`: entries missing `url` or `label` are dropped; order of the
///   surviving entries is preserved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PublicationRecord {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub venue: Option<String>,
    pub authors: Vec<String>,
    pub kind: Option<String>,
    pub thumb: Option<String>,
    pub links: Vec<PublicationLink>,
}

impl PublicationRecord {
    /// Extract a record from one array element. Non-object elements yield
    /// an all-default record rather than an error.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };

        Self {
            title: non_empty_string(object.get("title")),
            year: object.get("year").and_then(coerce_year),
            venue: non_empty_string(object.get("venue")),
            authors: string_entries(object.get("authors")),
            kind: non_empty_string(object.get("type")),
            thumb: non_empty_string(object.get("thumb")),
            links: link_entries(object.get("links")),
        }
    }

    /// Year tag text for the list view: the coerced year, or empty when
    /// coercion failed.
    #[must_use]
    pub fn year_label(&self) -> String {
        self.year.map_or_else(String::new, |year| year.to_string())
    }
}

fn non_empty_string(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

fn string_entries(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(Value::as_str)
                .map(ToString::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn link_entries(value: Option<&Value>) -> Vec<PublicationLink> {
    value
        .and_then(Value::as_array)
        .map(|entries| entries.iter().filter_map(link_entry).collect())
        .unwrap_or_default()
}

fn link_entry(value: &Value) -> Option<PublicationLink> {
    let object = value.as_object()?;
    let url = non_empty_string(object.get("url"))?;
    let label = non_empty_string(object.get("label"))?;
    Some(PublicationLink { url, label })
}

/// Coerce a JSON value to a calendar year.
///
/// Accepts integers, integral floats, and trimmed numeric strings
/// ("2020", "2020.0"). Non-finite or fractional values are rejected.
fn coerce_year(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i32::try_from(i).ok()
            } else {
                n.as_f64().and_then(integral_to_year)
            }
        }
        Value::String(s) => {
            let trimmed = s.trim();
            trimmed
                .parse::<i32>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().and_then(integral_to_year))
        }
        _ => None,
    }
}

#[allow(clippy::cast_possible_truncation)]
fn integral_to_year(value: f64) -> Option<i32> {
    if value.is_finite()
        && value.fract() == 0.0
        && value >= f64::from(i32::MIN)
        && value <= f64::from(i32::MAX)
    {
        Some(value as i32)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
