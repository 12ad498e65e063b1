use log::Level;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod hooks;
mod pages;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::error_1(&format!("Failed to initialise logging: {}", err).into());
    }

    leptos::mount::mount_to_body(app::App);
}
