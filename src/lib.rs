#![allow(non_snake_case)]

pub mod bindings;
pub mod components;
pub mod config;
pub mod services;
pub mod utils;

mod app;

use wasm_bindgen::prelude::*;

use crate::config::AppConfig;

#[wasm_bindgen(start)]
pub fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    init_logging();
    tracing::info!("Starting Talking Avatar Studio (Leptos)");

    let config = AppConfig::from_window();
    bindings::set_api_base(&config.api_base);
    log::debug!("Loaded config: {:?}", config);

    // Remove loading spinner
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let Some(loader) = document.get_element_by_id("app-loading") {
                loader.remove();
            }
        }
    }

    leptos::mount::mount_to_body(move || {
        let config = config.clone();
        leptos::view! { <app::App config=config /> }
    });
}

/// Route `log` records into `tracing` and emit them to the browser console.
fn init_logging() {
    if tracing_log::LogTracer::init().is_err() {
        // A logger is already installed (hot reload); keep it.
        return;
    }
    tracing_wasm::set_as_global_default();
}
