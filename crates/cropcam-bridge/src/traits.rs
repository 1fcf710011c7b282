// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic trait definitions for the capture screen's collaborators.

use cropcam_core::error::Result;
use cropcam_core::types::{
    AssetType, CameraPosition, CapturedFile, PermissionStatus, PhotoOptions, SavedAsset,
    ScreenDimensions, TapPoint,
};

/// Unified bridge that groups all native capabilities the screen needs.
///
/// Shared between the UI and the camera actor thread, hence `Send + Sync`.
pub trait PlatformBridge: CameraSubsystem + MediaLibrary + DisplayInfo + Send + Sync {
    /// Human-readable platform name (e.g. "iOS 17", "Android 14").
    fn platform_name(&self) -> &str;
}

/// Camera enumeration and permission handling.
pub trait CameraSubsystem: Send + Sync {
    /// Current camera permission, without prompting.
    fn permission_status(&self) -> PermissionStatus;

    /// Prompt for camera permission and return the resulting status.
    /// May block until the user answers.
    fn request_permission(&self) -> Result<PermissionStatus>;

    /// Resolve the physical camera at `position`.
    /// Returns Ok(None) if the device has no such camera.
    fn device(&self, position: CameraPosition) -> Result<Option<Box<dyn CameraDevice>>>;
}

/// A resolved camera.
///
/// Not required to be `Send`: a device is created on the camera actor thread
/// and never leaves it.
pub trait CameraDevice {
    /// Stable identifier reported by the platform.
    fn id(&self) -> &str;

    /// Focus at a point in preview coordinates.
    fn focus(&mut self, point: TapPoint) -> Result<()>;

    /// Take a photo and write it to disk.
    fn take_photo(&mut self, options: &PhotoOptions) -> Result<CapturedFile>;
}

/// The OS-level photo store.
pub trait MediaLibrary: Send + Sync {
    /// Save a captured file as an asset of the given type.
    fn save_asset(&self, file: &CapturedFile, asset_type: AssetType) -> Result<SavedAsset>;
}

/// Display metrics.
pub trait DisplayInfo: Send + Sync {
    /// Size of the window/screen in logical units.
    fn screen_dimensions(&self) -> Result<ScreenDimensions>;
}
