//! BikeMarket Web App - Leptos Frontend
//!
//! Browse, list and manage used bikes against the marketplace REST API.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("BikeMarket starting, API at {}", utils::constants::API_BASE);

    hide_loading_screen();

    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the static loading placeholder shipped in index.html.
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("No document available, cannot hide loading screen");
        return;
    };

    match document.get_element_by_id("leptos-loading") {
        Some(element) => {
            if let Some(html_element) = element.dyn_ref::<HtmlElement>() {
                if let Err(e) = html_element.class_list().add_1("hidden") {
                    log::warn!("Failed to add 'hidden' class: {:?}", e);
                }
            }
            element.set_attribute("style", "display: none !important;").ok();
            log::debug!("Loading screen hidden");
        }
        None => log::debug!("Loading element not found"),
    }
}
