#![allow(warnings)]
//! Aircraft Shop Frontend Entry Point

mod api;
mod collection;
mod config;
mod context;
mod models;
mod persistence;
mod selectors;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Logging initialized");
    mount_to_body(App);
}
