//! Product Query
//!
//! Loading the product collection: transport, cache, loader and the
//! reactive state the views read from.

mod cache;
mod loader;
mod source;
mod state;

pub use cache::QueryCache;
pub use loader::{use_product_loader, ProductLoader, SharedSource};
pub use source::{decode_products, HttpProductSource, ProductSource};
pub use state::{QueryState, QueryStateStoreFields, QueryStore};
