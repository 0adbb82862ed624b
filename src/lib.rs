//! Storefront Library
//!
//! This library exposes the internal modules for the binaries and the
//! end-to-end tests.

pub mod auth;
pub mod catalog;
pub mod cli_style;
pub mod config;
pub mod favorites;
pub mod kv_store;
pub mod shell;

// Re-export commonly used types for convenience
pub use auth::{ConfiguredCredentials, CredentialValidator};
pub use catalog::{CatalogClient, CatalogError, HttpCatalogClient, Product, Rating};
pub use favorites::{FavoritesError, FavoritesRepository, FAVORITES_KEY};
pub use kv_store::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore, StoreError};
pub use shell::{Screen, Shell};
