pub mod app;
pub mod layout;
pub mod routes;
pub mod shared;
pub mod system;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
