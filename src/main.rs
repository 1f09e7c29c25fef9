#![allow(non_snake_case)]

#[cfg(feature = "web")]
fn main() {
    use dioxus_logger::tracing::{self, Level};

    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    tracing::info!("Starting marketplace client");

    dioxus::launch(marketplace::client::App);
}

#[cfg(not(feature = "web"))]
fn main() {
    eprintln!("The marketplace client runs in the browser, build it with the `web` feature");
    std::process::exit(1);
}
