//! Google Books volume search.
//!
//! Unlike the keyed services, this lookup does not check the response status:
//! a transport error or a body that is not a volume listing aborts the run.

use reqwest::Url;
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::domain::CatalogInfo;
use crate::error::AppError;

const BASE_URL: &str = "https://www.googleapis.com/books/v1/volumes";
const ISBN_13: &str = "ISBN_13";

pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(client: Client) -> Self {
        Self::with_base_url(client, BASE_URL)
    }

    /// Point the client at another volumes endpoint.
    pub fn with_base_url(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Look up the single best match for `title`.
    pub fn lookup(&self, title: &str) -> Result<CatalogInfo, AppError> {
        let url = search_url(&self.base_url, title)?;

        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| AppError::transport(format!("Catalog request for '{title}' failed: {e}")))?;
        tracing::debug!(status = %resp.status(), "catalog response");

        let body: VolumesResponse = resp
            .json()
            .map_err(|e| AppError::parse(format!("Failed to parse catalog response for '{title}': {e}")))?;

        Ok(catalog_info(title, body))
    }
}

/// Search URL limited to one result. Spaces in the title become `+`.
pub fn search_url(base_url: &str, title: &str) -> Result<Url, AppError> {
    Url::parse_with_params(base_url, &[("q", title), ("maxResults", "1")])
        .map_err(|e| AppError::resource(format!("Invalid catalog URL: {e}")))
}

#[derive(Debug, Deserialize)]
pub struct VolumesResponse {
    #[serde(rename = "totalItems")]
    pub total_items: u64,
    #[serde(default)]
    pub items: Vec<Volume>,
}

#[derive(Debug, Deserialize)]
pub struct Volume {
    #[serde(rename = "volumeInfo", default)]
    pub volume_info: VolumeInfo,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    pub title: Option<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    pub average_rating: Option<f64>,
    pub ratings_count: Option<u64>,
    #[serde(default)]
    pub industry_identifiers: Vec<IndustryIdentifier>,
}

#[derive(Debug, Deserialize)]
pub struct IndustryIdentifier {
    #[serde(rename = "type")]
    pub kind: String,
    pub identifier: String,
}

/// Merge a search response into catalog fields, falling back to `query` for the title.
pub fn catalog_info(query: &str, body: VolumesResponse) -> CatalogInfo {
    if body.total_items == 0 {
        return CatalogInfo::not_found(query);
    }
    // Google occasionally reports hits without returning any items.
    let Some(volume) = body.items.into_iter().next() else {
        return CatalogInfo::not_found(query);
    };
    let info = volume.volume_info;

    let authors = if info.authors.is_empty() {
        None
    } else {
        Some(info.authors.join(", "))
    };

    CatalogInfo {
        title: info
            .title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| query.to_string()),
        authors,
        average_rating: info.average_rating,
        ratings_count: info.ratings_count,
        isbn13: first_isbn13(&info.industry_identifiers),
    }
}

fn first_isbn13(identifiers: &[IndustryIdentifier]) -> Option<String> {
    identifiers
        .iter()
        .find(|id| id.kind == ISBN_13)
        .map(|id| id.identifier.clone())
}
