//! Member Site Frontend Entry Point

mod models;
mod api;
mod config;
mod error;
mod i18n;
mod context;
mod resource;
mod components;
mod pages;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = config::SiteConfig::from_env();
    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(config.log_level)
            .build(),
    );
    tracing::info!("[APP] Starting, api base {}", config.api_base);
    mount_to_body(move || view! { <App config=config /> });
}
