//! HTTP client for the remote product catalog.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

use super::models::Product;

pub const DEFAULT_PRODUCTS_URL: &str = "https://fakestoreapi.com/products";

/// Errors that can occur while fetching the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to reach the catalog: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Catalog answered with status {0}")]
    Status(reqwest::StatusCode),

    #[error("Failed to parse catalog response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Read-only source of product listings.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Fetch the full product list. Single attempt, no retry.
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError>;
}

pub struct HttpCatalogClient {
    client: reqwest::Client,
    products_url: String,
}

impl HttpCatalogClient {
    /// Create a new catalog client.
    ///
    /// # Arguments
    /// * `products_url` - Full URL of the product list endpoint
    /// * `timeout_sec` - Request timeout in seconds
    pub fn new(products_url: String, timeout_sec: u64) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_sec))
            .build()?;

        Ok(Self {
            client,
            products_url,
        })
    }

    pub fn products_url(&self) -> &str {
        &self.products_url
    }
}

#[async_trait]
impl CatalogClient for HttpCatalogClient {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        debug!("GET {}", self.products_url);
        let response = self.client.get(&self.products_url).send().await?;

        if !response.status().is_success() {
            return Err(CatalogError::Status(response.status()));
        }

        let body = response.text().await?;
        let products: Vec<Product> = serde_json::from_str(&body)?;
        info!("Fetched {} products from catalog", products.len());
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = HttpCatalogClient::new(DEFAULT_PRODUCTS_URL.to_string(), 30).unwrap();
        assert_eq!(client.products_url(), "https://fakestoreapi.com/products");
    }
}
