#![allow(non_snake_case)]

use dioxus::prelude::*;

// Modules
mod components;
mod config;
mod context;
mod routes;
mod services;
mod stores;
mod utils;

use components::ToastProvider;
use config::ApiConfig;
use context::AppContext;

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    log::info!("Starting shortlink-web client");

    // Launch the Dioxus web app
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/main.css") }
        ToastProvider {
            AppServices {
                Router::<routes::Route> {}
            }
        }
    }
}

/// Provides `AppContext`. Sits inside `ToastProvider` so the notifier can bind to it.
#[component]
fn AppServices(children: Element) -> Element {
    use_context_provider(|| {
        let config = ApiConfig::from_env();
        log::info!(
            "Using API at {} with short links under {}",
            config.api_base(),
            config.public_origin()
        );
        AppContext::browser(config)
    });

    rsx! { {children} }
}
