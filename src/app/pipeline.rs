//! The enrichment pipeline: load titles -> fan-out -> write table.
//!
//! Nothing is written until every title has been enriched, so an aborted
//! run leaves the input table untouched.

use crate::domain::{Credentials, EnrichConfig};
use crate::enrich::{BookSources, Enrichment, HttpSources, enrich_titles};
use crate::error::AppError;
use crate::io::{load_titles, write_records_csv};

/// Run against the live services.
pub fn run_enrichment(config: &EnrichConfig, credentials: &Credentials) -> Result<Enrichment, AppError> {
    let sources = HttpSources::new(config, credentials)?;
    run_with_sources(config, &sources)
}

/// Run against any set of sources.
pub fn run_with_sources<S: BookSources + ?Sized>(
    config: &EnrichConfig,
    sources: &S,
) -> Result<Enrichment, AppError> {
    let titles = load_titles(&config.csv_path)?;
    tracing::info!(path = %config.csv_path.display(), titles = titles.len(), "loaded titles");

    let enrichment = enrich_titles(sources, &titles)?;

    write_records_csv(&config.output_path, &enrichment.records)?;
    tracing::info!(path = %config.output_path.display(), rows = enrichment.records.len(), "wrote table");

    Ok(enrichment)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::enrich::tests::{FakeSources, dune_sources};

    #[test]
    fn rewrites_table_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("books.csv");
        fs::write(&path, "Title\nDune\nUnknown Title\n").unwrap();

        let config = EnrichConfig::in_place(&path);
        run_with_sources(&config, &dune_sources()).unwrap();

        let out = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Title,Author,"));
        assert_eq!(lines[1], "Dune,Frank Herbert,4.5,120000,9780441013593,N/A,3,N/A");
        assert_eq!(lines[2], "Unknown Title,N/A,N/A,N/A,N/A,N/A,0,N/A");
    }

    #[test]
    fn second_run_rederives_same_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("books.csv");
        fs::write(&path, "Title\nDune\nThe Road\n").unwrap();
        let config = EnrichConfig::in_place(&path);

        run_with_sources(&config, &dune_sources()).unwrap();
        let first = fs::read_to_string(&path).unwrap();
        run_with_sources(&config, &dune_sources()).unwrap();
        let second = fs::read_to_string(&path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn output_path_leaves_input_alone() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("books.csv");
        let output = dir.path().join("enriched.csv");
        fs::write(&input, "Title\nDune\n").unwrap();

        let mut config = EnrichConfig::in_place(&input);
        config.output_path = output.clone();
        run_with_sources(&config, &dune_sources()).unwrap();

        assert_eq!(fs::read_to_string(&input).unwrap(), "Title\nDune\n");
        assert_eq!(fs::read_to_string(&output).unwrap().lines().count(), 2);
    }

    #[test]
    fn failed_run_does_not_touch_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("books.csv");
        fs::write(&path, "Title\nA\nB\n").unwrap();

        let sources = FakeSources {
            fail_rating_for: Some("B".to_string()),
            ..FakeSources::default()
        };
        let err = run_with_sources(&EnrichConfig::in_place(&path), &sources).unwrap_err();

        assert_eq!(err.exit_code(), crate::error::EXIT_PARSE);
        assert_eq!(fs::read_to_string(&path).unwrap(), "Title\nA\nB\n");
    }

    #[test]
    fn missing_input_is_a_resource_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = EnrichConfig::in_place(dir.path().join("missing.csv"));
        let err = run_with_sources(&config, &dune_sources()).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_RESOURCE);
    }
}
