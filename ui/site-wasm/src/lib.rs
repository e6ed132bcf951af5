//! CHRONÉA site script
//!
//! Rust + WASM page glue for the static watch site: wishlist controls and
//! page, theme toggle, form feedback, shop grid and the product-details page.
//! Each concern lives in its own module.

pub mod config;
pub mod details;
pub mod dom;
pub mod events;
pub mod forms;
pub mod shop;
pub mod state;
pub mod storage;
pub mod theme;
pub mod wishlist;

use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    init()
}

/// Main initialisation sequence. The module is loaded after the document is
/// parsed, so every page element is already present.
fn init() -> Result<(), JsValue> {
    let config = config::load();
    state::configure(config.clone());

    let els = dom::Elements::bind()?;

    // Theme first, so the page never flashes the wrong palette
    theme::restore(&els);

    // Details content must be in place before wishlist state is read off it
    details::populate(&config);

    wishlist::register_surfaces(&els);
    wishlist::sync(&els)?;

    events::bind_events(&els)?;

    Ok(())
}
