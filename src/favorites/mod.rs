mod repository;

pub use repository::{FavoritesError, FavoritesRepository, FAVORITES_KEY};
