//! Admin dashboard frontend.
//!
//! The host page owns the layout. This binary fills in whichever feature
//! containers it finds and wires the page chrome.

mod components;
mod config;
mod hooks;
mod pages;
mod seed;
mod shell;
mod store;
mod utils;

use web_sys::console;

fn main() {
    let config = config::load();
    let store = store::StoreHandle::new(seed::initial_store(&config));
    shell::init(&config, &store);
    console::debug_1(&"Admin dashboard ready".into());
}
