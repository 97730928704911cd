//! Input/output helpers.
//!
//! - title CSV ingest + validation (`ingest`)
//! - enriched table write-back (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;
