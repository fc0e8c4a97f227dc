//! Giglance Client - Main entry point
//!
//! A Dioxus application for the Giglance freelance marketplace.
//! Supports both web (WASM) and desktop platforms.

#![allow(non_snake_case)]

use dioxus::prelude::*;
use giglance_client::{push::PushManager, routes::Route, stores::auth};

// Assets
const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    // Initialize tracing for desktop
    #[cfg(not(target_arch = "wasm32"))]
    {
        use tracing_subscriber::EnvFilter;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("giglance_client=debug")),
            )
            .init();
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Pick up a saved session before anything renders gated content.
    use_future(|| async {
        auth::restore_session().await;
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        PushManager {
            Router::<Route> {}
        }
    }
}
