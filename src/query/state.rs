//! Query State Store
//!
//! Reactive view of the product query: data, loading and error flags.

use chrono::{DateTime, Utc};
use reactive_stores::Store;

use crate::error::FetchResult;
use crate::models::Product;

/// Query state with field-level reactivity
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct QueryState {
    /// Products from the latest successful fetch
    pub data: Option<Vec<Product>>,
    /// A request is in flight
    pub is_loading: bool,
    /// The latest request failed
    pub is_error: bool,
    /// When `data` was last replaced
    pub updated_at: Option<DateTime<Utc>>,
    /// Ticket of the most recently issued request
    pub latest_request: u64,
}

/// Type alias for the store
pub type QueryStore = Store<QueryState>;

impl QueryState {
    /// Start from whatever the cache still holds
    pub fn seeded(cached: Option<Vec<Product>>) -> Self {
        Self {
            data: cached,
            ..Default::default()
        }
    }

    /// Record a new request and return its ticket
    pub fn start_fetch(&mut self) -> u64 {
        self.latest_request += 1;
        self.is_loading = true;
        self.latest_request
    }

    /// Apply a finished request. Superseded tickets are ignored; returns whether it was applied.
    pub fn finish_fetch(&mut self, ticket: u64, outcome: FetchResult<Vec<Product>>) -> bool {
        if ticket != self.latest_request {
            return false;
        }
        self.is_loading = false;
        match outcome {
            Ok(products) => {
                self.data = Some(products);
                self.is_error = false;
                self.updated_at = Some(Utc::now());
            }
            Err(_) => self.is_error = true,
        }
        true
    }

    pub fn products(&self) -> &[Product] {
        self.data.as_deref().unwrap_or_default()
    }
}
