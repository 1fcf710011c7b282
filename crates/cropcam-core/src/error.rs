// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Cropcam.

use thiserror::Error;

/// Top-level error type for all Cropcam operations.
#[derive(Debug, Error)]
pub enum CropcamError {
    // -- Display / geometry --
    #[error("invalid screen dimensions: {width}x{height}")]
    InvalidDimensions { width: f64, height: f64 },

    // -- Camera --
    #[error("camera permission denied")]
    PermissionDenied,

    #[error("no camera device available")]
    NoCameraDevice,

    #[error("camera is not ready")]
    CameraNotReady,

    #[error("focus failed: {0}")]
    Focus(String),

    #[error("photo capture failed: {0}")]
    Capture(String),

    #[error("a capture is already in progress")]
    CaptureInProgress,

    // -- Media library --
    #[error("media library error: {0}")]
    MediaLibrary(String),

    #[error("image encoding failed: {0}")]
    ImageError(String),

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -- Platform bridge --
    #[error("platform bridge error: {0}")]
    Bridge(String),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, CropcamError>;
