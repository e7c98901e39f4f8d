//! Product List App
//!
//! Wires config, cache and loader into context and mounts the product list.

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::ProductList;
use crate::config::AppConfig;
use crate::query::{HttpProductSource, ProductLoader, QueryCache, SharedSource};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let source: SharedSource = Arc::new(HttpProductSource::new(config.endpoint.clone()));
    let loader = ProductLoader::new(source, QueryCache::new(), config.stale_time);

    // Provide context to all children
    provide_context(config);
    provide_context(loader);

    view! {
        <main class="app">
            <ProductList />
        </main>
    }
}
