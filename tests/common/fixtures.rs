//! Test data

use anyhow::Result;
use async_trait::async_trait;
use serde_json::{json, Value};
use storefront::CredentialValidator;

use super::constants::*;

/// Products in the shape served by the real catalog.
pub fn sample_products() -> Value {
    json!([
        {
            "id": BACKPACK_ID,
            "title": BACKPACK_TITLE,
            "price": 109.95,
            "description": "Your perfect pack for everyday use and walks in the forest.",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        },
        {
            "id": JACKET_ID,
            "title": "Mens Cotton Jacket",
            "price": 55.99,
            "description": "Great outerwear jackets for Spring/Autumn/Winter.",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/71li-ujtlUL._AC_UX679_.jpg",
            "rating": { "rate": 4.7, "count": 500 }
        },
        {
            "id": RING_ID,
            "title": "Pierced Owl Rose Gold Plated Stainless Steel Double",
            "price": 10.99,
            "description": "Rose Gold Plated Double Flared Tunnel Plug Earrings.",
            "category": "jewelery",
            "image": "https://fakestoreapi.com/img/51UDEzMJVpL._AC_UL640_QL65_ML3_.jpg"
        }
    ])
}

/// Plain-text credential check, avoids argon2 cost in tests that are not
/// about hashing.
pub struct FixedCredentials;

#[async_trait]
impl CredentialValidator for FixedCredentials {
    async fn validate(&self, email: &str, password: &str) -> Result<bool> {
        Ok(email == LOGIN_EMAIL && password == LOGIN_PASSWORD)
    }
}
