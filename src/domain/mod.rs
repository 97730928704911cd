//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the per-row input and output records (`TitleQuery`, `EnrichedRecord`)
//! - the catalog lookup result (`CatalogInfo`)
//! - the run-scoped bestseller snapshot (`BestsellerList`)
//! - run configuration (`EnrichConfig`, `Credentials`)

pub mod bestsellers;
pub mod types;

pub use bestsellers::*;
pub use types::*;
