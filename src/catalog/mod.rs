mod client;
mod models;

pub use client::{CatalogClient, CatalogError, HttpCatalogClient, DEFAULT_PRODUCTS_URL};
pub use models::{Product, ProductId, Rating};
