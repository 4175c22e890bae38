//! MUSE - waitlist landing pages
//!
//! Three server-rendered variants of the MUSE landing page, hydrated in the
//! browser where the scroll, pointer, carousel, counter and waitlist behaviors
//! attach to the rendered markup.

#![recursion_limit = "512"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
