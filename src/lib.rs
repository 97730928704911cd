//! `book-enrich` library crate.
//!
//! The binary (`enrich`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes or touching the network
//! - the lookup sources can be swapped behind the `BookSources` trait

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod enrich;
pub mod error;
pub mod io;
pub mod report;
