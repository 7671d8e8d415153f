//! Shop Configuration
//!
//! Endpoint locations, fixed at build time.

const DEFAULT_API_BASE_URL: &str = "http://localhost:3001";

/// Remote endpoint configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopConfig {
    /// Base URL of the cart service
    pub api_base_url: String,
    /// Base URL of the catalog API (empty = same origin)
    pub catalog_base_url: String,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            catalog_base_url: String::new(),
        }
    }
}

impl ShopConfig {
    /// Defaults, overridden by `SHOP_API_BASE_URL` / `SHOP_CATALOG_BASE_URL`
    /// when set at compile time. Without an override the catalog is served by
    /// the page's own origin.
    pub fn from_build_env() -> Self {
        let origin = page_origin();
        Self::from_overrides(
            option_env!("SHOP_API_BASE_URL"),
            option_env!("SHOP_CATALOG_BASE_URL").or(origin.as_deref()),
        )
    }

    fn from_overrides(api_base_url: Option<&str>, catalog_base_url: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: api_base_url
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            catalog_base_url: catalog_base_url
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.catalog_base_url),
        }
    }

    pub fn cart_url(&self) -> String {
        format!("{}/cart", self.api_base_url)
    }

    pub fn catalog_url(&self) -> String {
        format!("{}/api/aircrafts", self.catalog_base_url)
    }

    pub fn aircraft_url(&self, id: u32) -> String {
        format!("{}/api/aircrafts/{}", self.catalog_base_url, id)
    }
}

fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}
