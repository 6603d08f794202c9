#![allow(warnings)]
//! Shopping List Frontend Entry Point

mod models;
mod error;
mod config;
mod logger;
mod category;
mod parser;
mod codec;
mod ordering;
mod status;
mod list_store;
mod browser;
mod context;
mod store;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);
    let config = AppConfig::load();
    log::set_max_level(config.log_level.into());
    mount_to_body(move || view! { <App config=config.clone() /> });
}
