//! Product Loader
//!
//! Ties a product source to the query cache.

use std::sync::Arc;

use chrono::Duration;
use leptos::prelude::*;

use super::cache::{QueryCache, QueryKey};
use super::source::ProductSource;
use crate::error::FetchResult;
use crate::models::Product;

/// Cache key for the product collection
pub const PRODUCTS_KEY: QueryKey = "products";

/// Product source that can live in Leptos context
pub type SharedSource = Arc<dyn ProductSource + Send + Sync>;

/// Loads products through the cache
#[derive(Clone)]
pub struct ProductLoader {
    source: SharedSource,
    cache: QueryCache<Vec<Product>>,
    stale_time: Duration,
}

impl ProductLoader {
    pub fn new(source: SharedSource, cache: QueryCache<Vec<Product>>, stale_time: Duration) -> Self {
        Self {
            source,
            cache,
            stale_time,
        }
    }

    /// Last successful result, used to seed the view on mount
    pub fn cached(&self) -> Option<Vec<Product>> {
        self.cache.get(PRODUCTS_KEY)
    }

    /// Serve from cache while fresh, otherwise hit the source
    pub async fn load(&self) -> FetchResult<Vec<Product>> {
        if let Some(products) = self.cache.get_fresh(PRODUCTS_KEY, self.stale_time) {
            log::debug!("[ProductLoader] Serving {} cached products", products.len());
            return Ok(products);
        }
        self.fetch().await
    }

    /// Always hit the source, whatever the cache holds
    pub async fn refetch(&self) -> FetchResult<Vec<Product>> {
        self.cache.invalidate(PRODUCTS_KEY);
        self.fetch().await
    }

    async fn fetch(&self) -> FetchResult<Vec<Product>> {
        match self.source.fetch_products().await {
            Ok(products) => {
                log::info!("[ProductLoader] Loaded {} products", products.len());
                self.cache.put(PRODUCTS_KEY, products.clone());
                Ok(products)
            }
            Err(e) => {
                log::warn!("[ProductLoader] Fetch failed: {}", e);
                Err(e)
            }
        }
    }
}

/// Get the product loader from context
pub fn use_product_loader() -> ProductLoader {
    expect_context::<ProductLoader>()
}
