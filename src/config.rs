//! Application Configuration
//!
//! Static settings for the product list, provided via Leptos Context API.

use chrono::Duration;
use log::LevelFilter;

/// Endpoint used when `PRODUCT_API_URL` is not set at build time
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3001/products";

/// Rows per table page
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Thumbnail edge length in pixels
pub const DEFAULT_THUMBNAIL_PX: u32 = 80;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Full URL of the product collection
    pub endpoint: String,
    pub page_size: usize,
    /// How long a cached result counts as fresh; zero means every mount refetches
    pub stale_time: Duration,
    pub thumbnail_px: u32,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            stale_time: Duration::zero(),
            thumbnail_px: DEFAULT_THUMBNAIL_PX,
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Defaults, with the endpoint taken from `PRODUCT_API_URL` when it was set at build time
    pub fn from_build_env() -> Self {
        Self::with_endpoint(option_env!("PRODUCT_API_URL"))
    }

    fn with_endpoint(endpoint: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(url) = endpoint.map(str::trim).filter(|url| !url.is_empty()) {
            config.endpoint = url.to_string();
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.endpoint, "http://localhost:3001/products");
        assert_eq!(config.page_size, 5);
        assert_eq!(config.stale_time, Duration::zero());
    }

    #[test]
    fn test_endpoint_override() {
        let config = AppConfig::with_endpoint(Some(" https://shop.example/api/products "));
        assert_eq!(config.endpoint, "https://shop.example/api/products");

        let blank = AppConfig::with_endpoint(Some("   "));
        assert_eq!(blank.endpoint, DEFAULT_ENDPOINT);
    }
}
