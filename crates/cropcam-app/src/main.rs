// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Cropcam — camera capture screen with a crop guide
//
// Entry point. Initialises logging, the capture services and app state, and
// launches the Dioxus UI.

mod pages;
mod services;
mod state;

use dioxus::prelude::*;

use pages::camera::CameraScreen;
use services::app_services::AppServices;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Cropcam starting");

    dioxus::launch(app);
}

/// Root component.
fn app() -> Element {
    let svc = use_hook(|| match AppServices::init() {
        Ok(s) => {
            tracing::info!(platform = s.controller().platform_name(), "capture services initialised");
            s
        }
        Err(e) => {
            tracing::error!(error = %e, "config unusable, starting with defaults");
            AppServices::fallback()
        }
    });

    use_context_provider(|| svc.clone());
    use_context_provider(|| Signal::new(state::AppState::new(&svc)));

    rsx! {
        div { class: "app-container",
            style: "margin: 0; height: 100vh; overflow: hidden; background: black; font-family: system-ui, -apple-system, sans-serif;",
            CameraScreen {}
        }
    }
}
