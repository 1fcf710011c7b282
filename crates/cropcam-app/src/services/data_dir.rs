// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-aware data directory resolution.

use std::path::PathBuf;

const APP_DIR: &str = "cropcam";

/// Return the application data directory, creating it if needed.
///
/// On mobile the host supplies its own directories through the bridge.
pub fn data_dir() -> PathBuf {
    let dir = xdg_data_home().join(APP_DIR);
    std::fs::create_dir_all(&dir).ok();
    dir
}

/// Return a subdirectory inside the data dir (e.g. "captures").
pub fn data_subdir(name: &str) -> PathBuf {
    let dir = data_dir().join(name);
    std::fs::create_dir_all(&dir).ok();
    dir
}

/// Directory the desktop media library saves photos into.
///
/// Created lazily by the library on first save.
pub fn pictures_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("XDG_PICTURES_DIR") {
        return PathBuf::from(dir).join(APP_DIR);
    }
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join("Pictures").join(APP_DIR);
    }
    data_dir().join("library")
}

/// Scratch location used when the normal data dir cannot be trusted.
pub fn fallback_dir() -> PathBuf {
    std::env::temp_dir().join(APP_DIR)
}

fn xdg_data_home() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        return PathBuf::from(xdg);
    }
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".local").join("share");
    }
    PathBuf::from("/tmp")
}
