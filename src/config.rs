use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PubPageError, Result};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "pubpage.toml";

/// Smallest accepted chart dimension; guarantees a positive plot area
/// inside the fixed chart margins.
const MIN_CHART_SIZE: f64 = 120.0;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub page: PageConfig,

    #[serde(default)]
    pub list: ListConfig,

    #[serde(default)]
    pub chart: ChartConfig,
}

/// Host page options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageConfig {
    /// Page heading and document title.
    #[serde(default = "default_page_title")]
    pub title: String,

    /// Optional custom host template. Must carry all four region markers.
    #[serde(default)]
    pub template: Option<PathBuf>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: default_page_title(),
            template: None,
        }
    }
}

/// Card list options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListConfig {
    /// Author names rendered with emphasis, compared case-insensitively.
    #[serde(default)]
    pub highlight_authors: Vec<String>,

    /// Shown when a record has no usable title.
    #[serde(default = "default_placeholder_title")]
    pub placeholder_title: String,

    /// Venue tag text when a record has no venue.
    #[serde(default = "default_venue")]
    pub default_venue: String,

    /// Thumbnail source when a record has no image.
    #[serde(default = "default_placeholder_thumb")]
    pub placeholder_thumb: String,
}

impl ListConfig {
    /// Case-insensitive membership test against the highlight set.
    #[must_use]
    pub fn is_highlighted(&self, author: &str) -> bool {
        let needle = author.to_lowercase();
        self.highlight_authors
            .iter()
            .any(|name| name.to_lowercase() == needle)
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            highlight_authors: Vec::new(),
            placeholder_title: default_placeholder_title(),
            default_venue: default_venue(),
            placeholder_thumb: default_placeholder_thumb(),
        }
    }
}

/// Per-year chart options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartConfig {
    #[serde(default = "default_chart_width")]
    pub width: f64,

    #[serde(default = "default_chart_height")]
    pub height: f64,

    /// Caption drawn in the top-left corner of the chart.
    #[serde(default = "default_chart_caption")]
    pub caption: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: default_chart_width(),
            height: default_chart_height(),
            caption: default_chart_caption(),
        }
    }
}

impl Config {
    /// Load configuration from an explicit path, the default file in the
    /// working directory, or built-in defaults.
    ///
    /// # Errors
    /// Returns an error if an explicit path does not exist, the file cannot
    /// be read or parsed, or semantic validation fails.
    pub fn load(config_path: Option<&Path>, no_config: bool) -> Result<Self> {
        if no_config {
            return Ok(Self::default());
        }

        if let Some(path) = config_path {
            if !path.exists() {
                return Err(PubPageError::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
            return Self::load_from_path(path);
        }

        let default_path = Path::new(DEFAULT_CONFIG_FILE);
        if default_path.exists() {
            Self::load_from_path(default_path)
        } else {
            Ok(Self::default())
        }
    }

    fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Semantic validation beyond TOML syntax.
    ///
    /// # Errors
    /// Returns a `Config` error describing the first violated constraint.
    pub fn validate(&self) -> Result<()> {
        if self.chart.width < MIN_CHART_SIZE || self.chart.height < MIN_CHART_SIZE {
            return Err(PubPageError::Config(format!(
                "chart dimensions must be at least {MIN_CHART_SIZE}x{MIN_CHART_SIZE}, got {}x{}",
                self.chart.width, self.chart.height
            )));
        }

        for (i, name) in self.list.highlight_authors.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(PubPageError::Config(format!(
                    "list.highlight_authors[{i}] cannot be empty"
                )));
            }
        }

        Ok(())
    }
}

fn default_page_title() -> String {
    "Publications".to_string()
}

fn default_placeholder_title() -> String {
    "(untitled)".to_string()
}

fn default_venue() -> String {
    "Publication".to_string()
}

fn default_placeholder_thumb() -> String {
    "images/placeholder.png".to_string()
}

const fn default_chart_width() -> f64 {
    860.0
}

const fn default_chart_height() -> f64 {
    220.0
}

fn default_chart_caption() -> String {
    "Publications per year".to_string()
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
