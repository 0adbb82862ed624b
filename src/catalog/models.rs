//! Models for the remote product catalog.
//!
//! These types match the JSON returned by the catalog endpoint and are
//! also the exact shape persisted in the favorites collection.

use serde::{Deserialize, Serialize};

pub type ProductId = u64;

/// Rating shown in the product detail view when the catalog omits one.
pub const FALLBACK_RATING: f64 = 4.5;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    /// Image URL.
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

impl Product {
    /// Price with two decimals, prefixed with the store currency.
    pub fn display_price(&self) -> String {
        format!("R$ {:.2}", self.price)
    }

    pub fn display_rating(&self) -> f64 {
        match &self.rating {
            Some(rating) if rating.rate > 0.0 => rating.rate,
            _ => FALLBACK_RATING,
        }
    }
}
