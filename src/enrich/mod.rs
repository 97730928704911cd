//! Per-title enrichment fan-out.
//!
//! For every title, in input order and one at a time:
//! catalog lookup -> bestseller rank -> review count -> community rating.
//! The rank, review and rating lookups use the catalog's canonical title.
//!
//! The bestseller list is fetched once per run before the first title and
//! shared read-only afterwards.

use crate::domain::{BestsellerList, CatalogInfo, EnrichedRecord, TitleQuery};
use crate::error::AppError;

pub mod http;

pub use http::HttpSources;

/// The external lookups the fan-out depends on.
///
/// Implementations decide their own degradation policy: returning `Err`
/// aborts the whole run.
pub trait BookSources {
    fn catalog(&self, title: &str) -> Result<CatalogInfo, AppError>;
    fn bestsellers(&self) -> Result<BestsellerList, AppError>;
    fn review_count(&self, title: &str) -> Result<usize, AppError>;
    fn community_rating(&self, title: &str) -> Result<Option<String>, AppError>;
}

/// Records plus the list snapshot they were ranked against.
#[derive(Debug, Clone)]
pub struct Enrichment {
    pub records: Vec<EnrichedRecord>,
    pub bestsellers: BestsellerList,
}

/// Enrich every title. Output has exactly one record per input, same order.
pub fn enrich_titles<S: BookSources + ?Sized>(
    sources: &S,
    titles: &[TitleQuery],
) -> Result<Enrichment, AppError> {
    let bestsellers = sources.bestsellers()?;
    tracing::info!(list = %bestsellers.name, entries = bestsellers.len(), "bestseller list loaded");

    let mut records = Vec::with_capacity(titles.len());
    for (idx, query) in titles.iter().enumerate() {
        let span = tracing::debug_span!("title", n = idx + 1, line = query.line, title = %query.title);
        let _guard = span.enter();

        records.push(enrich_one(sources, &bestsellers, &query.title)?);
    }

    Ok(Enrichment { records, bestsellers })
}

/// Enrich a single title against an already-fetched list.
pub fn enrich_one<S: BookSources + ?Sized>(
    sources: &S,
    bestsellers: &BestsellerList,
    title: &str,
) -> Result<EnrichedRecord, AppError> {
    let catalog = sources.catalog(title)?;
    if catalog.title != title {
        tracing::debug!(canonical = %catalog.title, "catalog corrected title");
    }

    let rank = bestsellers.rank_of(&catalog.title);
    let reviews = sources.review_count(&catalog.title)?;
    let rating = sources.community_rating(&catalog.title)?;

    let record = EnrichedRecord::from_parts(catalog, rank, reviews, rating);
    tracing::debug!(
        catalog = record.has_catalog_data(),
        ?rank,
        reviews,
        rating = record.community_rating.as_deref().unwrap_or("-"),
        "enriched"
    );

    Ok(record)
}
