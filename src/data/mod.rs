//! Clients for the three external book services.
//!
//! - `catalog`: Google Books volume search (no key)
//! - `nyt`: New York Times bestseller lists + review search
//! - `librarything`: LibraryThing Common Knowledge work lookup (XML)
//!
//! Each client is a thin blocking wrapper: URL building and response parsing
//! are plain functions so they can be tested without a network.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::AppError;

pub mod catalog;
pub mod librarything;
pub mod nyt;
#[cfg(test)]
pub(crate) mod stub;

pub use catalog::CatalogClient;
pub use librarything::LibraryThingClient;
pub use nyt::NytClient;

/// Build the shared blocking HTTP client.
///
/// The timeout bounds every request so a stalled service fails that request
/// instead of hanging the run.
pub fn http_client(timeout: Duration) -> Result<Client, AppError> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!("book-enrich/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| AppError::resource(format!("Failed to build HTTP client: {e}")))
}
