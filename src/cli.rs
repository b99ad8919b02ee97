use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Output format for the validate report
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "pubpage")]
#[command(author, version, about = "Render publication lists into a static HTML page")]
#[command(long_about = "Render a JSON publication list into a static HTML page with a\n\
    filterable card list and a per-year SVG bar chart.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - Publication data could not be loaded or has an invalid shape\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the publication page
    Render(RenderArgs),

    /// Check a publication document and report field fallbacks
    Validate(ValidateArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Publication source: a JSON file path or an http(s) URL
    pub source: String,

    /// Output path for the generated page
    #[arg(short, long, default_value = "publications.html")]
    pub output: PathBuf,

    /// Initial type filter for the list ("all" keeps everything)
    #[arg(short = 't', long = "filter", default_value = "all")]
    pub filter: String,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Publication source: a JSON file path or an http(s) URL
    pub source: String,

    /// Output format [possible values: text, json]
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = "pubpage.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
