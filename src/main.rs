use std::fmt::Write as _;
use std::fs;

use clap::Parser;
use indexmap::IndexMap;
use serde::Serialize;

use pubpage::cli::{Cli, Commands, InitArgs, RenderArgs, ReportFormat, ValidateArgs};
use pubpage::config::Config;
use pubpage::loader::{self, Source};
use pubpage::output::{TypeFilter, render_page};
use pubpage::record::PublicationRecord;
use pubpage::{EXIT_CONFIG_ERROR, EXIT_DATA_ERROR, EXIT_SUCCESS, PubPageError};

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Render(args) => run_render(args, &cli),
        Commands::Validate(args) => run_validate(args, &cli),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}

/// Load-stage failures are data errors; everything else is a
/// configuration or integration problem.
const fn exit_code_for(error: &PubPageError) -> i32 {
    match error {
        PubPageError::Fetch { .. }
        | PubPageError::FileRead { .. }
        | PubPageError::NotAnArray { .. }
        | PubPageError::JsonParse(_) => EXIT_DATA_ERROR,
        _ => EXIT_CONFIG_ERROR,
    }
}

fn run_render(args: &RenderArgs, cli: &Cli) -> i32 {
    match run_render_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code_for(&e)
        }
    }
}

fn run_render_impl(args: &RenderArgs, cli: &Cli) -> pubpage::Result<()> {
    let config = Config::load(args.config.as_deref(), cli.no_config)?;
    let source = Source::parse(&args.source);
    let records = loader::load_records(&source)?;

    let filter = TypeFilter::parse(&args.filter);
    let page = render_page(&records, &config, &filter)?;
    fs::write(&args.output, &page)?;

    if !cli.quiet {
        println!(
            "Rendered {} publication(s) to {}",
            records.len(),
            args.output.display()
        );
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct KindCount {
    kind: String,
    count: usize,
}

/// Field-fallback summary for the validate command.
#[derive(Debug, Serialize)]
struct ValidationReport {
    publications: usize,
    with_year: usize,
    missing_title: usize,
    missing_venue: usize,
    missing_thumb: usize,
    untyped: usize,
    kinds: Vec<KindCount>,
    first_year: Option<i32>,
    last_year: Option<i32>,
}

fn build_report(records: &[PublicationRecord]) -> ValidationReport {
    let mut kinds: IndexMap<String, usize> = IndexMap::new();
    for record in records {
        if let Some(kind) = &record.kind {
            *kinds.entry(kind.clone()).or_insert(0) += 1;
        }
    }

    let years: Vec<i32> = records.iter().filter_map(|r| r.year).collect();

    ValidationReport {
        publications: records.len(),
        with_year: years.len(),
        missing_title: records.iter().filter(|r| r.title.is_none()).count(),
        missing_venue: records.iter().filter(|r| r.venue.is_none()).count(),
        missing_thumb: records.iter().filter(|r| r.thumb.is_none()).count(),
        untyped: records.iter().filter(|r| r.kind.is_none()).count(),
        kinds: kinds
            .into_iter()
            .map(|(kind, count)| KindCount { kind, count })
            .collect(),
        first_year: years.iter().copied().min(),
        last_year: years.iter().copied().max(),
    }
}

fn format_report_text(report: &ValidationReport) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "Publications: {}", report.publications);
    let _ = writeln!(output, "  with year: {}", report.with_year);
    let _ = writeln!(output, "  missing title: {}", report.missing_title);
    let _ = writeln!(output, "  missing venue: {}", report.missing_venue);
    let _ = writeln!(output, "  missing thumbnail: {}", report.missing_thumb);
    let _ = writeln!(output, "  untyped: {}", report.untyped);

    if !report.kinds.is_empty() {
        let joined = report
            .kinds
            .iter()
            .map(|k| format!("{} ({})", k.kind, k.count))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(output, "Types: {joined}");
    }

    if let (Some(first), Some(last)) = (report.first_year, report.last_year) {
        let _ = writeln!(output, "Years: {first}-{last}");
    }

    output
}

fn run_validate(args: &ValidateArgs, cli: &Cli) -> i32 {
    match run_validate_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code_for(&e)
        }
    }
}

fn run_validate_impl(args: &ValidateArgs, cli: &Cli) -> pubpage::Result<()> {
    let source = Source::parse(&args.source);
    let records = loader::load_records(&source)?;
    let report = build_report(&records);

    let output = match args.format {
        ReportFormat::Text => format_report_text(&report),
        ReportFormat::Json => {
            let json = serde_json::to_string_pretty(&report)?;
            format!("{json}\n")
        }
    };

    if !cli.quiet {
        print!("{output}");
    }
    Ok(())
}

fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_init_impl(args: &InitArgs) -> pubpage::Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(PubPageError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

fn generate_config_template() -> String {
    r#"# pubpage configuration file

[page]
# Page heading and document title
title = "Publications"

# Custom host template with region markers (optional)
# template = "page.html"

[list]
# Author names rendered with emphasis (case-insensitive match)
highlight_authors = []

# Shown when a record has no usable title
placeholder_title = "(untitled)"

# Venue tag for records without a venue
default_venue = "Publication"

# Thumbnail for records without an image
placeholder_thumb = "images/placeholder.png"

[chart]
width = 860.0
height = 220.0
caption = "Publications per year"
"#
    .to_string()
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
