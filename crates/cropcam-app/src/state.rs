// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Global application state — reactive signals for the Dioxus UI.

use cropcam_core::AppConfig;
use cropcam_core::human_errors::HumanError;
use cropcam_core::types::{SavedAsset, SessionState};

use crate::services::app_services::AppServices;

/// Shared state accessible to the screen via `use_context`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Where the capture session is in its lifecycle.
    pub session: SessionState,
    /// Whether a capture started from the UI is still running.
    pub capturing: bool,
    /// Dismissible notice for the last capture failure.
    pub notice: Option<HumanError>,
    /// Most recent asset written to the media library.
    pub last_saved: Option<SavedAsset>,
    /// Settings the screen was started with.
    pub config: AppConfig,
}

impl AppState {
    pub fn new(svc: &AppServices) -> Self {
        Self {
            session: svc.controller().state(),
            capturing: false,
            notice: None,
            last_saved: None,
            config: svc.config(),
        }
    }
}
