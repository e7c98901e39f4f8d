//! Frontend Models
//!
//! Data structures matching the `/products` payload.

use serde::{Deserialize, Serialize};

/// Product record (read-only, as served by the backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    /// Price in đồng, no fractional part
    pub price: u64,
    pub description: String,
    /// Image URL; absent for some records, rendered as a placeholder
    #[serde(default)]
    pub image: Option<String>,
}
