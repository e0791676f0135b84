#![recursion_limit = "256"]

pub mod ambient;
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod forms;
pub mod motion;
pub mod projects;
pub mod routes;
pub mod shell;
pub mod site;
pub mod tasks;
pub mod theme;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // a second init only happens on hot reload
    _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
