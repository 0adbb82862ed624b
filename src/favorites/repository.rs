//! Favorites persistence over a key-value store.
//!
//! The whole collection is a JSON array of products stored under
//! [`FAVORITES_KEY`]. Every mutation reads the full array, changes it and
//! writes the full array back.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use crate::catalog::{Product, ProductId};
use crate::kv_store::{KeyValueStore, StoreError};

/// Storage key holding the favorites collection.
pub const FAVORITES_KEY: &str = "@favorites";

#[derive(Debug, Error)]
pub enum FavoritesError {
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("Stored favorites are not a valid product list: {0}")]
    Corrupted(#[source] serde_json::Error),

    #[error("Failed to encode favorites: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Owner of the favorites collection.
///
/// Operations are serialized by an internal lock held across the whole
/// read-modify-write, so concurrent toggles through the same repository do
/// not lose updates. Writers that bypass this instance (another process on
/// the same store file, a second repository over the same store) are not
/// coordinated and race with last-write-wins.
pub struct FavoritesRepository {
    store: Arc<dyn KeyValueStore>,
    lock: Mutex<()>,
}

impl FavoritesRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            lock: Mutex::new(()),
        }
    }

    async fn load(&self) -> Result<Vec<Product>, FavoritesError> {
        match self.store.get(FAVORITES_KEY).await? {
            Some(raw) => serde_json::from_str(&raw).map_err(FavoritesError::Corrupted),
            None => Ok(Vec::new()),
        }
    }

    async fn save(&self, favorites: &[Product]) -> Result<(), FavoritesError> {
        let raw = serde_json::to_string(favorites).map_err(FavoritesError::Encode)?;
        self.store.set(FAVORITES_KEY, raw).await?;
        Ok(())
    }

    pub async fn try_is_favorite(&self, product_id: ProductId) -> Result<bool, FavoritesError> {
        let _guard = self.lock.lock().await;
        let favorites = self.load().await?;
        Ok(favorites.iter().any(|p| p.id == product_id))
    }

    /// Adds `product` if absent, removes it if present, and returns the new
    /// membership state.
    pub async fn try_toggle_favorite(&self, product: &Product) -> Result<bool, FavoritesError> {
        let _guard = self.lock.lock().await;
        let mut favorites = self.load().await?;

        let now_favorite = match favorites.iter().position(|p| p.id == product.id) {
            Some(index) => {
                favorites.remove(index);
                false
            }
            None => {
                favorites.push(product.clone());
                true
            }
        };

        self.save(&favorites).await?;
        debug!(
            "Product {} is now {}a favorite ({} favorites)",
            product.id,
            if now_favorite { "" } else { "not " },
            favorites.len()
        );
        Ok(now_favorite)
    }

    pub async fn try_list_favorites(&self) -> Result<Vec<Product>, FavoritesError> {
        let _guard = self.lock.lock().await;
        self.load().await
    }

    /// Membership check that reports `false` when the store cannot be read.
    pub async fn is_favorite(&self, product_id: ProductId) -> bool {
        match self.try_is_favorite(product_id).await {
            Ok(is_favorite) => is_favorite,
            Err(err) => {
                error!("Failed to check favorites for product {}: {}", product_id, err);
                false
            }
        }
    }

    /// Toggle that never fails. On error the stored collection is left as it
    /// was and the returned state is the membership known before the toggle,
    /// or `false` if not even that could be read.
    pub async fn toggle_favorite(&self, product: &Product) -> bool {
        match self.try_toggle_favorite(product).await {
            Ok(now_favorite) => {
                info!(
                    "Product {} {} favorites",
                    product.id,
                    if now_favorite { "added to" } else { "removed from" }
                );
                now_favorite
            }
            Err(err) => {
                error!("Failed to save favorite for product {}: {}", product.id, err);
                self.is_favorite(product.id).await
            }
        }
    }

    pub async fn list_favorites(&self) -> Vec<Product> {
        match self.try_list_favorites().await {
            Ok(favorites) => favorites,
            Err(err) => {
                error!("Failed to load favorites: {}", err);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Rating;
    use crate::kv_store::MemoryKeyValueStore;
    use async_trait::async_trait;

    fn product(id: ProductId) -> Product {
        Product {
            id,
            title: format!("Product {}", id),
            price: 10.0 + id as f64,
            description: "A product".to_string(),
            category: "misc".to_string(),
            image: format!("https://example.com/{}.jpg", id),
            rating: Some(Rating {
                rate: 4.0,
                count: 10,
            }),
        }
    }

    fn repository_with(store: MemoryKeyValueStore) -> (Arc<MemoryKeyValueStore>, FavoritesRepository) {
        let store = Arc::new(store);
        let repository = FavoritesRepository::new(store.clone());
        (store, repository)
    }

    async fn stored_ids(store: &MemoryKeyValueStore) -> Vec<ProductId> {
        let raw = store.get(FAVORITES_KEY).await.unwrap().unwrap();
        let products: Vec<Product> = serde_json::from_str(&raw).unwrap();
        products.iter().map(|p| p.id).collect()
    }

    /// Store whose reads work but whose writes always fail.
    struct ReadOnlyStore(MemoryKeyValueStore);

    #[async_trait]
    impl KeyValueStore for ReadOnlyStore {
        async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.0.get(key).await
        }

        async fn set(&self, _key: &str, _value: String) -> Result<(), StoreError> {
            Err(StoreError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only",
            )))
        }
    }

    #[tokio::test]
    async fn test_empty_storage_is_not_favorite() {
        let (store, repository) = repository_with(MemoryKeyValueStore::new());
        assert!(!repository.is_favorite(42).await);
        // A read must not create the collection
        assert_eq!(store.get(FAVORITES_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_toggle_adds_then_removes() {
        let (_, repository) = repository_with(MemoryKeyValueStore::new());
        let p = product(5);

        assert!(repository.toggle_favorite(&p).await);
        assert!(repository.is_favorite(5).await);

        assert!(!repository.toggle_favorite(&p).await);
        assert!(!repository.is_favorite(5).await);
    }

    #[tokio::test]
    async fn test_toggle_removes_matching_entry_only() {
        let initial = serde_json::to_string(&vec![product(1), product(2)]).unwrap();
        let (store, repository) =
            repository_with(MemoryKeyValueStore::with_entry(FAVORITES_KEY, initial));

        let now_favorite = repository.toggle_favorite(&product(1)).await;

        assert!(!now_favorite);
        assert_eq!(stored_ids(&store).await, vec![2]);
    }

    #[tokio::test]
    async fn test_toggle_appends_full_record() {
        let initial = serde_json::to_string(&vec![product(2)]).unwrap();
        let (store, repository) =
            repository_with(MemoryKeyValueStore::with_entry(FAVORITES_KEY, initial));
        let new_product = Product {
            id: 7,
            title: "X".to_string(),
            price: 9.99,
            description: String::new(),
            category: "c".to_string(),
            image: "i".to_string(),
            rating: None,
        };

        assert!(repository.toggle_favorite(&new_product).await);
        assert_eq!(stored_ids(&store).await, vec![2, 7]);

        let favorites = repository.list_favorites().await;
        assert_eq!(favorites[1], new_product);
    }

    #[tokio::test]
    async fn test_double_toggle_restores_membership() {
        let initial = serde_json::to_string(&vec![product(3)]).unwrap();
        let (_, repository) =
            repository_with(MemoryKeyValueStore::with_entry(FAVORITES_KEY, initial));

        for id in [3, 4] {
            let before = repository.is_favorite(id).await;
            repository.toggle_favorite(&product(id)).await;
            repository.toggle_favorite(&product(id)).await;
            assert_eq!(repository.is_favorite(id).await, before);
        }
    }

    #[tokio::test]
    async fn test_ids_stay_unique_across_toggles() {
        let (store, repository) = repository_with(MemoryKeyValueStore::new());
        let sequence = [1, 2, 1, 3, 2, 2, 1, 4, 3, 1];

        for id in sequence {
            repository.toggle_favorite(&product(id)).await;
        }

        let mut ids = stored_ids(&store).await;
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
        // 1 toggled 4x, 2 toggled 3x, 3 toggled 2x, 4 toggled 1x
        assert_eq!(ids, vec![2, 4]);
    }

    #[tokio::test]
    async fn test_concurrent_toggles_do_not_lose_updates() {
        let repository = Arc::new(FavoritesRepository::new(Arc::new(MemoryKeyValueStore::new())));

        let mut handles = Vec::new();
        for id in 1..=20 {
            let repository = repository.clone();
            handles.push(tokio::spawn(async move {
                repository.toggle_favorite(&product(id)).await
            }));
        }
        for handle in handles {
            assert!(handle.await.unwrap());
        }

        let mut ids: Vec<ProductId> = repository
            .list_favorites()
            .await
            .iter()
            .map(|p| p.id)
            .collect();
        ids.sort();
        assert_eq!(ids, (1..=20).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_corrupted_collection_degrades() {
        let (store, repository) =
            repository_with(MemoryKeyValueStore::with_entry(FAVORITES_KEY, "{not json"));

        assert!(!repository.is_favorite(1).await);
        assert!(repository.list_favorites().await.is_empty());
        assert!(!repository.toggle_favorite(&product(1)).await);
        assert!(matches!(
            repository.try_toggle_favorite(&product(1)).await,
            Err(FavoritesError::Corrupted(_))
        ));

        // Nothing was overwritten
        assert_eq!(
            store.get(FAVORITES_KEY).await.unwrap(),
            Some("{not json".to_string())
        );
    }

    #[tokio::test]
    async fn test_failed_write_keeps_previous_state() {
        let initial = serde_json::to_string(&vec![product(1)]).unwrap();
        let repository = FavoritesRepository::new(Arc::new(ReadOnlyStore(
            MemoryKeyValueStore::with_entry(FAVORITES_KEY, initial),
        )));

        // Removal fails, product is still a favorite
        assert!(repository.toggle_favorite(&product(1)).await);
        // Addition fails, product is still not a favorite
        assert!(!repository.toggle_favorite(&product(2)).await);
        assert!(matches!(
            repository.try_toggle_favorite(&product(2)).await,
            Err(FavoritesError::Store(StoreError::Io(_)))
        ));
    }
}
