// Al Bayt Al Atiq Landing Page — Leptos 0.8 Edition
// Al Bayt Al Atiq Web Team (c)2025

use albayt_landing::{App, logging};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = logging::init() {
        web_sys::console::error_1(&err.to_string().into());
    }
    logging::print_banner();
    tracing::info!(version = albayt_landing::config::VERSION, "mounting landing page");

    leptos::mount::mount_to_body(|| view! { <App/> });
}
