// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Cropcam capture screen.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CropcamError, Result};

/// Unique identifier for a single capture attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CaptureId(pub Uuid);

impl CaptureId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CaptureId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CaptureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Width and height of the display in logical units.
///
/// Read once at startup and treated as immutable for the session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenDimensions {
    pub width: f64,
    pub height: f64,
}

impl ScreenDimensions {
    /// Validate and build screen dimensions. Both sides must be finite and > 0.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(CropcamError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// The smaller of the two sides.
    pub fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }

    /// Whether `point` lies inside the screen bounds (edges inclusive).
    pub fn contains(&self, point: TapPoint) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }
}

/// A coordinate produced by a tap on the preview.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TapPoint {
    pub x: f64,
    pub y: f64,
}

impl TapPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Physical position of a camera on the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CameraPosition {
    Back,
    Front,
    External,
}

impl std::fmt::Display for CameraPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Back => "back",
            Self::Front => "front",
            Self::External => "external",
        };
        f.write_str(name)
    }
}

/// Camera permission as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PermissionStatus {
    /// The user has not been asked yet.
    NotDetermined,
    Granted,
    Denied,
}

impl PermissionStatus {
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted)
    }
}

/// Trade-off the camera subsystem should make when taking a photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualityPrioritization {
    Speed,
    Balanced,
    Quality,
}

/// Options passed to the camera subsystem's take-photo call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoOptions {
    pub quality: QualityPrioritization,
}

impl Default for PhotoOptions {
    fn default() -> Self {
        Self {
            quality: QualityPrioritization::Speed,
        }
    }
}

/// A photo written to disk by the camera subsystem.
///
/// Transient: read once, handed to the media library, then dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapturedFile {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub captured_at: DateTime<Utc>,
}

impl CapturedFile {
    /// `file://` URI form of the path, as media stores expect it.
    pub fn uri(&self) -> String {
        format!("file://{}", self.path.display())
    }
}

/// Asset type tag understood by the media library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetType {
    Photo,
    Video,
}

impl AssetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Photo => "photo",
            Self::Video => "video",
        }
    }
}

/// What the media library reports after a successful save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedAsset {
    /// SHA-256 of the stored bytes, lowercase hex.
    pub id: String,
    pub path: PathBuf,
    pub asset_type: AssetType,
}

/// Lifecycle of the capture screen for one mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Not mounted yet, or unmounted.
    Uninitialized,
    /// Camera permission is not granted; the preview stays inactive.
    AwaitingPermission,
    /// Device resolved, preview active, focus and capture accepted.
    Ready,
    /// No camera device could be resolved. Terminal for this mount.
    Unavailable,
}

impl SessionState {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_reject_non_positive() {
        assert!(ScreenDimensions::new(0.0, 100.0).is_err());
        assert!(ScreenDimensions::new(100.0, -1.0).is_err());
        assert!(ScreenDimensions::new(f64::NAN, 100.0).is_err());
        assert!(ScreenDimensions::new(f64::INFINITY, 100.0).is_err());
    }

    #[test]
    fn dimensions_contains_edges() {
        let screen = ScreenDimensions::new(100.0, 200.0).unwrap();
        assert!(screen.contains(TapPoint::new(0.0, 0.0)));
        assert!(screen.contains(TapPoint::new(100.0, 200.0)));
        assert!(!screen.contains(TapPoint::new(100.5, 10.0)));
        assert!(!screen.contains(TapPoint::new(-1.0, 10.0)));
    }

    #[test]
    fn captured_file_uri_has_file_scheme() {
        let file = CapturedFile {
            path: PathBuf::from("/tmp/cropcam/abc.jpg"),
            width: 640,
            height: 480,
            captured_at: Utc::now(),
        };
        assert_eq!(file.uri(), "file:///tmp/cropcam/abc.jpg");
    }

    #[test]
    fn photo_asset_tag() {
        assert_eq!(AssetType::Photo.as_str(), "photo");
    }
}
