//! Cart Endpoint
//!
//! Read-only access to the server-known cart, fetched once at startup.

use async_trait::async_trait;

use crate::config::ShopConfig;
use crate::models::{Item, ItemList};
use super::{get_json, ApiError};

/// Source of the remote cart snapshot
#[async_trait(?Send)]
pub trait CartSource {
    async fn fetch_cart(&self) -> Result<Vec<Item>, ApiError>;
}

/// `GET {api_base_url}/cart`
#[derive(Debug, Clone)]
pub struct HttpCartSource {
    client: reqwest::Client,
    url: String,
}

impl HttpCartSource {
    pub fn new(config: &ShopConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: &ShopConfig) -> Self {
        Self {
            client,
            url: config.cart_url(),
        }
    }
}

#[async_trait(?Send)]
impl CartSource for HttpCartSource {
    async fn fetch_cart(&self) -> Result<Vec<Item>, ApiError> {
        get_json::<ItemList>(&self.client, &self.url)
            .await
            .map(|ItemList(items)| items)
    }
}
