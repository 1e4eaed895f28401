//! Command-line interface for the harvester.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{self, validate_index_url};
use crate::error::{HarvestError, Result};
use crate::harvester::harvest;
use crate::http::HttpFetcher;
use crate::render;
use crate::types::TagRecord;

/// tagatlas - Harvest HTML element and attribute metadata from the MDN reference.
#[derive(Parser)]
#[command(name = "tagatlas")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Harvest element metadata from the reference index.
    Harvest {
        /// Index document URL
        #[arg(long, default_value = config::MDN_INDEX_URL)]
        index_url: String,

        /// Output format for successful records
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Write successful records to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Output encodings for harvested records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One pretty-printed JSON record per tag
    Json,

    /// TypeScript-style attribute interface declarations
    Dts,
}

/// Run the CLI.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Harvest {
            index_url,
            format,
            output,
        } => harvest_command(&index_url, format, output.as_deref()).await,
    }
}

/// Execute the harvest command.
async fn harvest_command(
    index_url: &str,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    // Validate inputs before making HTTP requests
    validate_index_url(index_url)?;

    // Validate the output directory exists (if specified) before downloading
    if let Some(path) = output {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            return Err(HarvestError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Output directory does not exist: {}", parent.display()),
            )));
        }
    }

    eprintln!(
        "{} {}",
        style("Harvesting").bold(),
        style(index_url).cyan()
    );

    // Progress spinner (drawn on stderr, keeping stdout clean for records)
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Downloading index and tag pages...");
    pb.enable_steady_tick(Duration::from_millis(100));

    let fetcher = HttpFetcher::new()?;
    let outcomes = match harvest(&fetcher, index_url).await {
        Ok(outcomes) => outcomes,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.finish_and_clear();

    let successes = outcomes.iter().filter(|outcome| outcome.is_ok()).count();
    let failures = outcomes.len() - successes;
    eprintln!("  Tags: {}", style(successes).green());
    if failures > 0 {
        eprintln!("  Failures: {}", style(failures).yellow().bold());
    }

    let body = match format {
        OutputFormat::Json => render::render_successes(&outcomes)?,
        OutputFormat::Dts => {
            let records = outcomes
                .iter()
                .filter_map(|outcome| outcome.as_ref().ok())
                .collect::<Vec<&TagRecord>>();
            render::render_declarations(records)
        }
    };

    match output {
        Some(path) => {
            fs::write(path, body)?;
            eprintln!(
                "{} {}",
                style("Saved to:").green().bold(),
                path.display()
            );
        }
        None => print!("{body}"),
    }

    // Failure reports go to stderr, separate from the records
    eprint!("{}", render::render_failures(&outcomes)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_harvest_defaults() {
        let cli = Cli::parse_from(["tagatlas", "harvest"]);

        let Commands::Harvest {
            index_url,
            format,
            output,
        } = cli.command;
        assert_eq!(index_url, config::MDN_INDEX_URL);
        assert_eq!(format, OutputFormat::Json);
        assert!(output.is_none());
    }

    #[test]
    fn test_cli_parse_harvest_with_options() {
        let cli = Cli::parse_from([
            "tagatlas",
            "harvest",
            "--index-url",
            "https://example.com/elements",
            "--format",
            "dts",
            "--output",
            "tags.d.ts",
        ]);

        let Commands::Harvest {
            index_url,
            format,
            output,
        } = cli.command;
        assert_eq!(index_url, "https://example.com/elements");
        assert_eq!(format, OutputFormat::Dts);
        assert_eq!(output, Some(PathBuf::from("tags.d.ts")));
    }
}
