//! Screen states of the storefront shell.

use tracing::{error, info};

use crate::catalog::{CatalogClient, CatalogError, Product, ProductId};
use crate::favorites::FavoritesRepository;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    Login,
    ProductList,
    ProductDetails,
}

impl ScreenKind {
    pub fn label(&self) -> &'static str {
        match self {
            ScreenKind::Login => "login",
            ScreenKind::ProductList => "products",
            ScreenKind::ProductDetails => "details",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

/// A one-off message shown to the user, the shell's version of an alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductListState {
    pub products: Vec<Product>,
    pub loading: bool,
    /// Set when the last fetch failed; the list is then empty.
    pub error: Option<String>,
}

impl ProductListState {
    pub fn loading() -> Self {
        Self {
            products: Vec::new(),
            loading: true,
            error: None,
        }
    }

    /// Ends a load. Failures are logged and leave an empty list behind.
    pub fn complete(self, result: Result<Vec<Product>, CatalogError>) -> Self {
        match result {
            Ok(products) => Self {
                products,
                loading: false,
                error: None,
            },
            Err(err) => {
                error!("Failed to fetch products: {}", err);
                Self {
                    products: Vec::new(),
                    loading: false,
                    error: Some("Could not load products".to_string()),
                }
            }
        }
    }

    pub async fn load(catalog: &dyn CatalogClient) -> Self {
        let state = Self::loading();
        state.complete(catalog.fetch_products().await)
    }

    pub fn find(&self, product_id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == product_id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetailsState {
    pub product: Product,
    pub is_favorite: bool,
}

impl ProductDetailsState {
    pub async fn open(product: Product, favorites: &FavoritesRepository) -> Self {
        let is_favorite = favorites.is_favorite(product.id).await;
        Self {
            product,
            is_favorite,
        }
    }

    /// Flips the favorite flag only once the change is stored.
    pub async fn toggle(&mut self, favorites: &FavoritesRepository) -> Notice {
        match favorites.try_toggle_favorite(&self.product).await {
            Ok(now_favorite) => {
                self.is_favorite = now_favorite;
                if now_favorite {
                    info!("Product {} added to favorites", self.product.id);
                    Notice::success("Product added to favorites")
                } else {
                    info!("Product {} removed from favorites", self.product.id);
                    Notice::success("Product removed from favorites")
                }
            }
            Err(err) => {
                error!("Failed to save favorite for product {}: {}", self.product.id, err);
                Notice::error("Could not update favorites")
            }
        }
    }
}

pub enum Screen {
    Login,
    ProductList(ProductListState),
    /// The list is kept so that `back` returns to it without a new fetch.
    ProductDetails {
        list: ProductListState,
        details: ProductDetailsState,
    },
}

impl Screen {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::Login => ScreenKind::Login,
            Screen::ProductList(_) => ScreenKind::ProductList,
            Screen::ProductDetails { .. } => ScreenKind::ProductDetails,
        }
    }
}
