//! New York Times Books API: current bestseller lists and review search.
//!
//! Both lookups degrade instead of failing: a non-success status or a failed
//! request yields an empty result. A success response whose body cannot be
//! decoded is still an error.

use reqwest::Url;
use reqwest::blocking::{Client, Response};
use serde::Deserialize;

use crate::domain::{BestsellerEntry, BestsellerList};
use crate::error::AppError;

const BASE_URL: &str = "https://api.nytimes.com/svc/books/v3";

pub struct NytClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl NytClient {
    pub fn new(client: Client, api_key: impl Into<String>) -> Self {
        Self::with_base_url(client, api_key, BASE_URL)
    }

    /// Point the client at another Books API root (`.../svc/books/v3`).
    pub fn with_base_url(client: Client, api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Fetch the current snapshot of `list_name`.
    pub fn fetch_bestsellers(&self, list_name: &str) -> Result<BestsellerList, AppError> {
        let url = list_url(&self.base_url, list_name, &self.api_key)?;
        let Some(resp) = self.send_or_degrade(url, "bestseller list") else {
            return Ok(BestsellerList::empty(list_name));
        };

        let body: ListResponse = resp
            .json()
            .map_err(|e| AppError::parse(format!("Failed to parse bestseller list '{list_name}': {e}")))?;

        Ok(BestsellerList::new(list_name, body.results.books))
    }

    /// Number of reviews the service matches to `title`.
    pub fn fetch_review_count(&self, title: &str) -> Result<usize, AppError> {
        let url = reviews_url(&self.base_url, title, &self.api_key)?;
        let Some(resp) = self.send_or_degrade(url, "review search") else {
            return Ok(0);
        };

        let body: ReviewsResponse = resp
            .json()
            .map_err(|e| AppError::parse(format!("Failed to parse reviews for '{title}': {e}")))?;

        Ok(body.results.len())
    }

    fn send_or_degrade(&self, url: Url, what: &str) -> Option<Response> {
        match self.client.get(url).send() {
            Ok(resp) if resp.status().is_success() => Some(resp),
            Ok(resp) => {
                tracing::warn!(status = %resp.status(), "{what} unavailable; treating as empty");
                None
            }
            Err(e) => {
                // reqwest includes the URL (and so the key) in its message.
                tracing::warn!(timeout = e.is_timeout(), "{what} request failed; treating as empty");
                None
            }
        }
    }
}

/// `<base>/lists/current/<list>.json`. The list name is a single path
/// segment, so `/`, `?` and `#` in it are escaped.
pub fn list_url(base_url: &str, list_name: &str, api_key: &str) -> Result<Url, AppError> {
    let file = format!("{list_name}.json");
    let mut url = endpoint(base_url, &["lists", "current", &file])?;
    url.query_pairs_mut().append_pair("api-key", api_key);
    Ok(url)
}

pub fn reviews_url(base_url: &str, title: &str, api_key: &str) -> Result<Url, AppError> {
    let mut url = endpoint(base_url, &["reviews.json"])?;
    url.query_pairs_mut()
        .append_pair("title", title)
        .append_pair("api-key", api_key);
    Ok(url)
}

fn endpoint(base_url: &str, segments: &[&str]) -> Result<Url, AppError> {
    let mut url = Url::parse(base_url)
        .map_err(|e| AppError::resource(format!("Invalid NYT base URL '{base_url}': {e}")))?;
    url.path_segments_mut()
        .map_err(|_| AppError::resource(format!("NYT base URL '{base_url}' cannot take a path")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

#[derive(Debug, Deserialize)]
pub struct ListResponse {
    pub results: ListResults,
}

#[derive(Debug, Deserialize)]
pub struct ListResults {
    #[serde(default)]
    pub books: Vec<BestsellerEntry>,
}

#[derive(Debug, Deserialize)]
pub struct ReviewsResponse {
    #[serde(default)]
    pub results: Vec<serde_json::Value>,
}
