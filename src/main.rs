//! Danky Donuts Frontend Entry Point

mod models;
mod catalog;
mod config;
mod error;
mod storage;
mod votes;
mod store;
mod context;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    if console_logger::init(config.log_level).is_err() {
        web_sys::console::warn_1(&"[APP] logger already installed".into());
    }
    log::info!("Mounting app");

    mount_to_body(move || view! { <App config=config.clone() /> });
}
