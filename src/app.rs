//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - sets up logging
//! - loads credentials
//! - runs the enrichment pipeline and prints the summary

use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::domain::{Credentials, EnrichConfig};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `enrich` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = config_from_args(&cli);
    let credentials = Credentials::from_env()?;

    let run = pipeline::run_enrichment(&config, &credentials)?;
    println!(
        "{}",
        crate::report::format_run_summary(&run, &config, chrono::Local::now())
    );

    Ok(())
}

pub fn config_from_args(cli: &Cli) -> EnrichConfig {
    EnrichConfig {
        csv_path: cli.csv.clone(),
        output_path: cli.output.clone().unwrap_or_else(|| cli.csv.clone()),
        list_name: cli.list.clone(),
        timeout: Duration::from_secs(cli.timeout.max(1)),
    }
}

/// Log to stderr so stdout stays the summary. `RUST_LOG` overrides the default.
fn init_logging(verbose: bool) {
    let default = if verbose { "book_enrich=debug" } else { "book_enrich=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // A second init (e.g. from tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn defaults_overwrite_books_csv() {
        let cli = Cli::parse_from(["enrich"]);
        let config = config_from_args(&cli);
        assert_eq!(config.csv_path, PathBuf::from("books.csv"));
        assert_eq!(config.output_path, config.csv_path);
        assert_eq!(config.list_name, "hardcover-fiction");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn output_and_list_can_be_overridden() {
        let cli = Cli::parse_from([
            "enrich",
            "-f",
            "in.csv",
            "--output",
            "out.csv",
            "--list",
            "combined-print-and-e-book-nonfiction",
            "--timeout",
            "0",
        ]);
        let config = config_from_args(&cli);
        assert_eq!(config.csv_path, PathBuf::from("in.csv"));
        assert_eq!(config.output_path, PathBuf::from("out.csv"));
        assert_eq!(config.list_name, "combined-print-and-e-book-nonfiction");
        assert_eq!(config.timeout, Duration::from_secs(1));
    }
}
