//! Fake catalog server lifecycle management
//!
//! Each test gets its own server on a random port. Dropping the server
//! shuts it down.

use super::constants::*;
use super::fixtures::sample_products;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

#[derive(Clone, Default)]
struct FakeCatalogState {
    product_requests: Arc<AtomicUsize>,
}

async fn products(State(state): State<FakeCatalogState>) -> Json<Value> {
    state.product_requests.fetch_add(1, Ordering::SeqCst);
    Json(sample_products())
}

async fn broken() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "catalog is down")
}

async fn garbage() -> &'static str {
    "<html>definitely not a product list</html>"
}

async fn slow() -> Json<Value> {
    tokio::time::sleep(Duration::from_millis(SLOW_RESPONSE_DELAY_MS)).await;
    Json(sample_products())
}

pub struct FakeCatalogServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    state: FakeCatalogState,
    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl FakeCatalogServer {
    /// Spawns a new fake catalog on a random port.
    ///
    /// The listener is bound before this returns, so requests made right
    /// after are queued rather than refused.
    pub async fn spawn() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();

        let state = FakeCatalogState::default();
        let app = Router::new()
            .route(PRODUCTS_PATH, get(products))
            .route(BROKEN_PATH, get(broken))
            .route(GARBAGE_PATH, get(garbage))
            .route(SLOW_PATH, get(slow))
            .with_state(state.clone());

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Server failed");
        });

        Self {
            base_url: format!("http://127.0.0.1:{}", port),
            state,
            _shutdown_tx: Some(shutdown_tx),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Number of requests served on [`PRODUCTS_PATH`].
    pub fn product_requests(&self) -> usize {
        self.state.product_requests.load(Ordering::SeqCst)
    }
}

impl Drop for FakeCatalogServer {
    fn drop(&mut self) {
        if let Some(tx) = self._shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
