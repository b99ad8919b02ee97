//! Publication data loading: local file or remote URL, parsed and shape-checked.
//!
//! Record-level malformation never surfaces here; only the top-level array
//! shape and transport failures are fatal.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde_json::Value;

use crate::error::{PubPageError, Result};
use crate::record::PublicationRecord;

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// HTTP client abstraction for dependency injection.
pub trait HttpClient {
    /// Perform a GET request and return the response body.
    fn get(&self, url: &str) -> Result<String>;
}

/// Production HTTP client using reqwest.
///
/// This implementation cannot be unit tested without a real HTTP server,
/// so it is excluded from coverage measurement.
#[derive(Debug, Default)]
pub struct ReqwestClient;

#[cfg(not(tarpaulin_include))]
impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> Result<String> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| PubPageError::Config(format!("Failed to create HTTP client: {e}")))?;

        let response = client.get(url).send().map_err(|e| {
            let reason = if e.is_timeout() {
                "request timed out".to_string()
            } else if e.is_connect() {
                "connection failed".to_string()
            } else {
                e.to_string()
            };
            PubPageError::Fetch {
                url: url.to_string(),
                reason,
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PubPageError::Fetch {
                url: url.to_string(),
                reason: format!("HTTP {status}"),
            });
        }

        response.text().map_err(|e| PubPageError::Fetch {
            url: url.to_string(),
            reason: format!("failed to read response: {e}"),
        })
    }
}

/// Check if a string is a remote URL (http:// or https://).
#[must_use]
pub fn is_remote_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

/// Where the publication document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Remote(String),
}

impl Source {
    /// Classify a CLI argument as a file path or remote URL.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        if is_remote_url(input) {
            Self::Remote(input.to_string())
        } else {
            Self::File(PathBuf::from(input))
        }
    }

    /// Human-readable origin for error messages.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Remote(url) => url.clone(),
        }
    }
}

/// Load and parse publication records from a source.
///
/// # Errors
/// Returns an error on transport/IO failure, JSON syntax errors, or a
/// non-array top-level value.
pub fn load_records(source: &Source) -> Result<Vec<PublicationRecord>> {
    load_records_with_client(source, &ReqwestClient)
}

/// [`load_records`] with an injected HTTP client.
///
/// # Errors
/// Same failure modes as [`load_records`].
pub fn load_records_with_client(
    source: &Source,
    client: &impl HttpClient,
) -> Result<Vec<PublicationRecord>> {
    let text = match source {
        Source::File(path) => fs::read_to_string(path).map_err(|e| PubPageError::FileRead {
            path: path.clone(),
            source: e,
        })?,
        Source::Remote(url) => client.get(url)?,
    };
    parse_records(&text)
}

/// Parse a JSON document into publication records.
///
/// The top-level value must be an array; each element is projected
/// leniently (non-object elements become all-default records).
///
/// # Errors
/// Returns `JsonParse` on syntax errors and `NotAnArray` on any other
/// top-level shape.
pub fn parse_records(text: &str) -> Result<Vec<PublicationRecord>> {
    let document: Value = serde_json::from_str(text)?;

    let Value::Array(items) = document else {
        return Err(PubPageError::NotAnArray {
            found: json_type_name(&document),
        });
    };

    Ok(items.iter().map(PublicationRecord::from_value).collect())
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
