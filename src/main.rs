#![allow(warnings)]
//! Product List Frontend Entry Point

mod app;
mod columns;
mod components;
mod config;
mod error;
mod logging;
mod models;
mod query;
mod table;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    logging::init(config.log_level);
    log::info!("[APP] Loading products from {}", config.endpoint);

    mount_to_body(move || view! { <App config=config /> });
}
