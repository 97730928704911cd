//! End-of-run summary printed to stdout.

use chrono::{DateTime, Local};

use crate::domain::EnrichConfig;
use crate::enrich::Enrichment;

/// Counts of what each source contributed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    pub titles: usize,
    pub catalog_hits: usize,
    pub ranked: usize,
    pub reviewed: usize,
    pub community_rated: usize,
}

impl RunStats {
    pub fn from_enrichment(enrichment: &Enrichment) -> Self {
        let records = &enrichment.records;
        Self {
            titles: records.len(),
            catalog_hits: records
                .iter()
                .filter(|r| r.has_catalog_data())
                .count(),
            ranked: records.iter().filter(|r| r.bestseller_rank.is_some()).count(),
            reviewed: records.iter().filter(|r| r.review_count > 0).count(),
            community_rated: records.iter().filter(|r| r.community_rating.is_some()).count(),
        }
    }
}

pub fn format_run_summary(
    enrichment: &Enrichment,
    config: &EnrichConfig,
    finished_at: DateTime<Local>,
) -> String {
    let stats = RunStats::from_enrichment(enrichment);
    let mut out = String::new();

    out.push_str("=== enrich - book metadata ===\n");
    out.push_str(&format!("Input: {}\n", config.csv_path.display()));
    if config.output_path != config.csv_path {
        out.push_str(&format!("Output: {}\n", config.output_path.display()));
    }
    out.push_str(&format!(
        "Bestseller list: {} ({} entries)\n",
        enrichment.bestsellers.name,
        enrichment.bestsellers.len()
    ));
    out.push_str(&format!("Titles: {}\n", stats.titles));
    out.push_str(&format!(
        "  catalog matches:   {}/{}\n",
        stats.catalog_hits, stats.titles
    ));
    out.push_str(&format!("  on bestseller list: {}\n", stats.ranked));
    out.push_str(&format!("  with reviews:       {}\n", stats.reviewed));
    out.push_str(&format!("  community rated:    {}\n", stats.community_rated));
    out.push_str(&format!("Finished: {}", finished_at.format("%Y-%m-%d %H:%M:%S")));

    out
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::domain::{BestsellerList, CatalogInfo, EnrichedRecord};

    fn enrichment() -> Enrichment {
        let hit = CatalogInfo {
            title: "Dune".to_string(),
            isbn13: Some("9780441013593".to_string()),
            ..CatalogInfo::default()
        };
        Enrichment {
            records: vec![
                EnrichedRecord::from_parts(hit, Some(2), 3, Some("8.5".to_string())),
                EnrichedRecord::from_parts(CatalogInfo::not_found("Nope"), None, 0, None),
            ],
            bestsellers: BestsellerList::empty("hardcover-fiction"),
        }
    }

    #[test]
    fn counts_contributions() {
        let stats = RunStats::from_enrichment(&enrichment());
        assert_eq!(
            stats,
            RunStats {
                titles: 2,
                catalog_hits: 1,
                ranked: 1,
                reviewed: 1,
                community_rated: 1,
            }
        );
    }

    #[test]
    fn summary_mentions_output_only_when_redirected() {
        let at = Local.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let mut config = EnrichConfig::in_place("books.csv");

        let text = format_run_summary(&enrichment(), &config, at);
        assert!(text.contains("Input: books.csv"));
        assert!(!text.contains("Output:"));
        assert!(text.contains("catalog matches:   1/2"));
        assert!(text.ends_with("Finished: 2026-01-02 03:04:05"));

        config.output_path = "enriched.csv".into();
        let text = format_run_summary(&enrichment(), &config, at);
        assert!(text.contains("Output: enriched.csv"));
    }
}
