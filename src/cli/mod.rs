//! Command-line parsing for the book enrichment job.
//!
//! There is a single command: read the table, enrich it, write it back.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::DEFAULT_LIST;

/// Top-level CLI.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "enrich",
    version,
    about = "Enrich a CSV of book titles with Google Books, NYT and LibraryThing data",
    after_help = "Reads NYT_API_KEY and LIBRARYTHING_API_KEY from the environment (or .env)."
)]
pub struct Cli {
    /// Table of titles (first column, first row is a header). Overwritten in place.
    #[arg(short = 'f', long, value_name = "CSV", default_value = "books.csv")]
    pub csv: PathBuf,

    /// Write the enriched table here instead of overwriting the input.
    #[arg(short = 'o', long, value_name = "CSV")]
    pub output: Option<PathBuf>,

    /// NYT bestseller list to rank titles against.
    #[arg(long, default_value = DEFAULT_LIST)]
    pub list: String,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Log every lookup (same as RUST_LOG=book_enrich=debug).
    #[arg(short, long)]
    pub verbose: bool,
}
