//! UI Components
//!
//! Leptos components for the product list.

mod error_alert;
mod pagination;
mod product_list;
mod product_table;

pub use error_alert::ErrorAlert;
pub use pagination::Pagination;
pub use product_list::ProductList;
pub use product_table::ProductTable;
