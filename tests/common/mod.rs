//! Common test infrastructure
//!
//! Tests should only import from this module, not from internal submodules.
//!
//! # Example
//!
//! ```no_run
//! mod common;
//! use common::{FakeCatalogServer, PRODUCTS_PATH};
//!
//! #[tokio::test]
//! async fn test_fetch() {
//!     let server = FakeCatalogServer::spawn().await;
//!     let url = server.url(PRODUCTS_PATH);
//! }
//! ```

mod constants;
mod fixtures;
mod server;

#[allow(unused_imports)]
pub use constants::*;
#[allow(unused_imports)]
pub use fixtures::{sample_products, FixedCredentials};
pub use server::FakeCatalogServer;
