// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Cropcam — platform bridge abstractions.
//
// The capture screen only talks to the camera, the media library, and the
// display through the traits in `traits`. Mobile hosts hand their own
// `PlatformBridge` to the capture controller; desktop and CI builds use the
// virtual camera in `desktop`.

use std::path::PathBuf;

use cropcam_core::AppConfig;

pub mod desktop;
pub mod integrity;
pub mod traits;

/// Build the bridge for the current platform.
///
/// `capture_dir` receives freshly taken photos; `library_dir` is where the
/// media library keeps saved assets.
pub fn platform_bridge(
    config: &AppConfig,
    capture_dir: PathBuf,
    library_dir: PathBuf,
) -> Box<dyn traits::PlatformBridge> {
    Box::new(desktop::DesktopBridge::new(config, capture_dir, library_dir))
}
