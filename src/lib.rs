//! Membership site frontend built with Leptos. The crate wires a session
//! context, an account-status route guard and a small set of pages. The
//! guard decision and the route allowlists are plain Rust so they can be
//! exercised natively with `cargo test`; the browser entry point is only
//! compiled for `wasm32`.

pub mod app;
#[path = "lib/mod.rs"]
pub mod app_lib;
pub mod components;
pub mod features;
pub mod routes;

/// Installs browser logging and mounts the application.
#[cfg(target_arch = "wasm32")]
pub fn start() {
    use leptos::prelude::mount_to_body;

    console_error_panic_hook::set_once();

    let config = app_lib::config::AppConfig::load();
    if let Err(err) = app_lib::telemetry::init(&config) {
        web_sys::console::error_1(&format!("telemetry disabled: {err}").into());
    }
    tracing::info!(site = %config.site_name, commit = app_lib::GIT_COMMIT_HASH, "starting frontend");

    mount_to_body(app::App);
}
