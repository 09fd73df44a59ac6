//! Federation Dashboard - Main Entry Point
//!
//! Launches the Dioxus app with the stock operator navigation.

use federation_dashboard::app::App;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    federation_dashboard::shared::logging::init_tracing();

    tracing::info!("Starting federation dashboard...");

    dioxus::launch(App);
}
