//! Shared domain types.
//!
//! Every optional field is an `Option` in memory and only becomes the `N/A`
//! sentinel when a record is rendered as a table row. That keeps the column
//! count fixed without leaking string markers into the lookup code.

use std::fmt::Display;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::AppError;

/// Marker written for "no data found". Distinct from `0` and from `""`.
pub const SENTINEL: &str = "N/A";

/// Bestseller list used when none is configured.
pub const DEFAULT_LIST: &str = "hardcover-fiction";

/// Environment variable holding the New York Times Books API key.
pub const ENV_NYT_API_KEY: &str = "NYT_API_KEY";
/// Environment variable holding the LibraryThing API key.
pub const ENV_LIBRARYTHING_API_KEY: &str = "LIBRARYTHING_API_KEY";

/// Column headers of the enriched table, in output order.
pub const OUTPUT_HEADER: [&str; 8] = [
    "Title",
    "Author",
    "Google Books Average Rating",
    "Google Books Ratings Count",
    "ISBN",
    "NYT Best Seller Rank",
    "NYT Review Count",
    "LibraryThing Average Rating",
];

/// A title as supplied by the user, one per input data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleQuery {
    pub title: String,
    /// 1-based line in the source table (for diagnostics).
    pub line: usize,
}

/// Catalog-derived fields for one title.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogInfo {
    /// Canonical title, or the query title when the catalog had nothing better.
    pub title: String,
    /// Authors joined with `", "`.
    pub authors: Option<String>,
    pub average_rating: Option<f64>,
    pub ratings_count: Option<u64>,
    pub isbn13: Option<String>,
}

impl CatalogInfo {
    /// The value used when the catalog returns no match.
    pub fn not_found(title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..Self::default()
        }
    }
}

/// One fully enriched output row.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedRecord {
    pub title: String,
    pub authors: Option<String>,
    pub catalog_rating: Option<f64>,
    pub catalog_rating_count: Option<u64>,
    pub isbn13: Option<String>,
    pub bestseller_rank: Option<u32>,
    /// Zero when the review search found nothing.
    pub review_count: usize,
    pub community_rating: Option<String>,
}

impl EnrichedRecord {
    pub fn from_parts(
        catalog: CatalogInfo,
        bestseller_rank: Option<u32>,
        review_count: usize,
        community_rating: Option<String>,
    ) -> Self {
        Self {
            title: catalog.title,
            authors: catalog.authors,
            catalog_rating: catalog.average_rating,
            catalog_rating_count: catalog.ratings_count,
            isbn13: catalog.isbn13,
            bestseller_rank,
            review_count,
            community_rating,
        }
    }

    pub fn has_catalog_data(&self) -> bool {
        self.authors.is_some()
            || self.catalog_rating.is_some()
            || self.catalog_rating_count.is_some()
            || self.isbn13.is_some()
    }

    /// Render as the eight output columns, substituting the sentinel.
    pub fn to_row(&self) -> [String; 8] {
        [
            self.title.clone(),
            or_sentinel(self.authors.as_ref()),
            or_sentinel(self.catalog_rating.as_ref()),
            or_sentinel(self.catalog_rating_count.as_ref()),
            or_sentinel(self.isbn13.as_ref()),
            or_sentinel(self.bestseller_rank.as_ref()),
            self.review_count.to_string(),
            or_sentinel(self.community_rating.as_ref()),
        ]
    }
}

fn or_sentinel<T: Display>(value: Option<&T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => SENTINEL.to_string(),
    }
}

/// API credentials for the keyed services.
///
/// The catalog service needs none.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub nyt_api_key: String,
    pub librarything_api_key: String,
}

impl Credentials {
    pub fn new(nyt_api_key: impl Into<String>, librarything_api_key: impl Into<String>) -> Self {
        Self {
            nyt_api_key: nyt_api_key.into(),
            librarything_api_key: librarything_api_key.into(),
        }
    }

    /// Read both keys from the process environment, loading `.env` first if present.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Ok(Self {
            nyt_api_key: require_env(ENV_NYT_API_KEY)?,
            librarything_api_key: require_env(ENV_LIBRARYTHING_API_KEY)?,
        })
    }
}

// Keys never end up in logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("nyt_api_key", &"<redacted>")
            .field("librarything_api_key", &"<redacted>")
            .finish()
    }
}

fn require_env(name: &str) -> Result<String, AppError> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::resource(format!("Missing {name} in environment (.env)."))),
    }
}

/// Fully-resolved configuration for a run.
#[derive(Debug, Clone)]
pub struct EnrichConfig {
    /// Table to read titles from.
    pub csv_path: PathBuf,
    /// Table to write to. Equals `csv_path` unless redirected.
    pub output_path: PathBuf,
    /// Bestseller list category.
    pub list_name: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl EnrichConfig {
    pub fn in_place(csv_path: impl Into<PathBuf>) -> Self {
        let csv_path = csv_path.into();
        Self {
            output_path: csv_path.clone(),
            csv_path,
            list_name: DEFAULT_LIST.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_render_as_sentinel() {
        let record = EnrichedRecord::from_parts(CatalogInfo::not_found("Unknown Book"), None, 0, None);
        let row = record.to_row();
        assert_eq!(row[0], "Unknown Book");
        for idx in [1, 2, 3, 4, 5, 7] {
            assert_eq!(row[idx], SENTINEL, "column {idx}");
        }
        // Review count is a count, never the sentinel.
        assert_eq!(row[6], "0");
    }

    #[test]
    fn dune_row_matches_expected_output() {
        let catalog = CatalogInfo {
            title: "Dune".to_string(),
            authors: Some("Frank Herbert".to_string()),
            average_rating: Some(4.5),
            ratings_count: Some(120000),
            isbn13: Some("9780441013593".to_string()),
        };
        let row = EnrichedRecord::from_parts(catalog, None, 3, None).to_row();
        assert_eq!(
            row.join(", "),
            "Dune, Frank Herbert, 4.5, 120000, 9780441013593, N/A, 3, N/A"
        );
    }

    #[test]
    fn whole_ratings_print_without_fraction() {
        let catalog = CatalogInfo {
            average_rating: Some(4.0),
            ..CatalogInfo::not_found("X")
        };
        let row = EnrichedRecord::from_parts(catalog, Some(7), 1, Some("3.85".to_string())).to_row();
        assert_eq!(row[2], "4");
        assert_eq!(row[5], "7");
        assert_eq!(row[7], "3.85");
    }

    #[test]
    fn not_found_has_no_catalog_data() {
        let miss = EnrichedRecord::from_parts(CatalogInfo::not_found("X"), Some(1), 4, None);
        assert!(!miss.has_catalog_data());
        let hit = CatalogInfo {
            isbn13: Some("978".to_string()),
            ..CatalogInfo::not_found("X")
        };
        assert!(EnrichedRecord::from_parts(hit, None, 0, None).has_catalog_data());
    }

    #[test]
    fn credentials_debug_hides_keys() {
        let creds = Credentials::new("nyt-secret", "lt-secret");
        let dbg = format!("{creds:?}");
        assert!(!dbg.contains("secret"));
    }
}
