//! UI Components
//!
//! Presentational Leptos components. They read store state and raise intents;
//! none of them own collection state.

mod aircraft_card;
mod header;
mod home_page;
mod catalog_page;
mod favorites_page;
mod cart_page;
mod product_details;

pub use aircraft_card::AircraftCard;
pub use header::Header;
pub use home_page::HomePage;
pub use catalog_page::CatalogPage;
pub use favorites_page::FavoritesPage;
pub use cart_page::CartPage;
pub use product_details::ProductDetails;
