//! Shared constants for end-to-end tests

// ============================================================================
// Fake catalog routes
// ============================================================================

/// Answers with the sample products.
pub const PRODUCTS_PATH: &str = "/products";

/// Answers 500.
pub const BROKEN_PATH: &str = "/broken";

/// Answers 200 with a body that is not a product list.
pub const GARBAGE_PATH: &str = "/garbage";

/// Answers after [`SLOW_RESPONSE_DELAY_MS`].
pub const SLOW_PATH: &str = "/slow";

pub const SLOW_RESPONSE_DELAY_MS: u64 = 3000;

// ============================================================================
// Sample catalog
// ============================================================================

pub const PRODUCT_COUNT: usize = 3;

/// Backpack, has a rating
pub const BACKPACK_ID: u64 = 1;
pub const BACKPACK_TITLE: &str = "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops";

/// Jacket, has a rating
pub const JACKET_ID: u64 = 3;

/// Ring, the catalog omits its rating
pub const RING_ID: u64 = 8;

// ============================================================================
// Login
// ============================================================================

pub const LOGIN_EMAIL: &str = "admin@admin";
pub const LOGIN_PASSWORD: &str = "123456";
