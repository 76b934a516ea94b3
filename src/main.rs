//! Project board front end entry point

mod app;
mod components;
mod config;
mod core;
mod features;
mod logging;
mod pages;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    mount_to_body(App);
}
