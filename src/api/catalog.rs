//! Catalog Endpoints
//!
//! Used by the catalog and product detail pages; the collection store never
//! reads the catalog.

use crate::config::ShopConfig;
use crate::models::{Item, ItemId, ItemList};
use super::{get_json, ApiError};

/// Client for `GET /api/aircrafts` and `GET /api/aircrafts/{id}`
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    config: ShopConfig,
}

impl CatalogClient {
    pub fn new(config: ShopConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub async fn list_aircraft(&self) -> Result<Vec<Item>, ApiError> {
        get_json::<ItemList>(&self.client, &self.config.catalog_url())
            .await
            .map(|ItemList(items)| items)
    }

    pub async fn get_aircraft(&self, id: ItemId) -> Result<Item, ApiError> {
        get_json(&self.client, &self.config.aircraft_url(id)).await
    }
}
