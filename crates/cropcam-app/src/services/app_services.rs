// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Central service layer — loads the config, builds the platform bridge and
// hands the capture controller to the Dioxus UI.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use cropcam_bridge::platform_bridge;
use cropcam_capture::{CaptureController, CaptureSettings};
use cropcam_core::AppConfig;
use cropcam_core::error::Result;
use cropcam_core::types::ScreenDimensions;
use tracing::{info, warn};

use super::data_dir;

/// Shared services accessible from components via `use_context::<AppServices>()`.
///
/// Cheap to clone; the controller is Arc-backed.
#[derive(Clone)]
pub struct AppServices {
    controller: CaptureController,
    config: Arc<AppConfig>,
}

impl AppServices {
    /// Initialise from the data directory. Call once at app startup.
    ///
    /// A missing config file is written out with defaults; an unreadable one
    /// is ignored. Fails if the configured screen size is unusable.
    pub fn init() -> Result<Self> {
        let dir = data_dir::data_dir();
        info!(path = %dir.display(), "initialising app services");

        let config = match load_config(&dir) {
            Some(config) => config,
            None => {
                let config = AppConfig::default();
                if let Err(e) = persist_config(&dir, &config) {
                    warn!(error = %e, "could not write default config");
                }
                config
            }
        };
        ScreenDimensions::new(config.screen.width, config.screen.height)?;

        Ok(Self::build(
            config,
            data_dir::data_subdir("captures"),
            data_dir::pictures_dir(),
        ))
    }

    /// Defaults in a temporary directory, for when `init` fails.
    pub fn fallback() -> Self {
        let dir = data_dir::fallback_dir();
        Self::build(AppConfig::default(), dir.join("captures"), dir.join("library"))
    }

    fn build(config: AppConfig, capture_dir: PathBuf, library_dir: PathBuf) -> Self {
        info!(
            captures = %capture_dir.display(),
            library = %library_dir.display(),
            position = %config.camera_position,
            "building capture controller"
        );
        let bridge = platform_bridge(&config, capture_dir, library_dir);
        let controller = CaptureController::new(Arc::from(bridge), CaptureSettings::from(&config));
        Self {
            controller,
            config: Arc::new(config),
        }
    }

    pub fn controller(&self) -> CaptureController {
        self.controller.clone()
    }

    /// Get a clone of the config the services were built with.
    pub fn config(&self) -> AppConfig {
        (*self.config).clone()
    }
}

// -- Config file persistence -------------------------------------------------

const CONFIG_FILE: &str = "config.json";

fn load_config(data_dir: &Path) -> Option<AppConfig> {
    let path = data_dir.join(CONFIG_FILE);
    let data = std::fs::read_to_string(&path).ok()?;
    match serde_json::from_str(&data) {
        Ok(config) => Some(config),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring unreadable config");
            None
        }
    }
}

fn persist_config(data_dir: &Path, config: &AppConfig) -> Result<()> {
    let path = data_dir.join(CONFIG_FILE);
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(&path, json)?;
    Ok(())
}
