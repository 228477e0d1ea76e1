#![allow(non_snake_case)]

use dioxus_logger::tracing::{self, Level};

fn main() {
    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    tracing::info!("Starting QuickStay client");

    dioxus::launch(quickstay::client::App);
}
