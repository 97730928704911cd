//! `BookSources` backed by the live services.

use crate::data::{CatalogClient, LibraryThingClient, NytClient, http_client};
use crate::domain::{BestsellerList, CatalogInfo, Credentials, EnrichConfig};
use crate::error::AppError;

use super::BookSources;

pub struct HttpSources {
    catalog: CatalogClient,
    nyt: NytClient,
    librarything: LibraryThingClient,
    list_name: String,
}

impl HttpSources {
    pub fn new(config: &EnrichConfig, credentials: &Credentials) -> Result<Self, AppError> {
        // One connection pool for all three services.
        let client = http_client(config.timeout)?;
        Ok(Self {
            catalog: CatalogClient::new(client.clone()),
            nyt: NytClient::new(client.clone(), credentials.nyt_api_key.clone()),
            librarything: LibraryThingClient::new(client, credentials.librarything_api_key.clone()),
            list_name: config.list_name.clone(),
        })
    }

    /// Assemble from already-configured clients.
    pub fn from_clients(
        catalog: CatalogClient,
        nyt: NytClient,
        librarything: LibraryThingClient,
        list_name: impl Into<String>,
    ) -> Self {
        Self {
            catalog,
            nyt,
            librarything,
            list_name: list_name.into(),
        }
    }
}

impl BookSources for HttpSources {
    fn catalog(&self, title: &str) -> Result<CatalogInfo, AppError> {
        self.catalog.lookup(title)
    }

    fn bestsellers(&self) -> Result<BestsellerList, AppError> {
        self.nyt.fetch_bestsellers(&self.list_name)
    }

    fn review_count(&self, title: &str) -> Result<usize, AppError> {
        self.nyt.fetch_review_count(title)
    }

    fn community_rating(&self, title: &str) -> Result<Option<String>, AppError> {
        self.librarything.fetch_rating(title)
    }
}
