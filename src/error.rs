use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PubPageError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read publications from: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to fetch publications from {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("Publication data must be a JSON array, got {found}")]
    NotAnArray { found: &'static str },

    #[error("Missing output region '{region}' in page template")]
    MissingRegion { region: &'static str },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, PubPageError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
