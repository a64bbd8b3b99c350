//! Household Builder Frontend Entry Point

mod config;
mod context;
mod store;
mod dialog;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"[APP] Logger already initialized".into());
    }
    mount_to_body(App);
}
