// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Desktop bridge for development and CI builds where no mobile camera exists.
//
// The camera is virtual: each photo is a synthetic test pattern rendered with
// the `image` crate and written as JPEG. The media library is a plain
// directory of content-fingerprinted files.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::Utc;
use image::codecs::jpeg::JpegEncoder;
use image::{Rgb, RgbImage};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use cropcam_core::AppConfig;
use cropcam_core::error::{CropcamError, Result};
use cropcam_core::types::{
    AssetType, CameraPosition, CapturedFile, PermissionStatus, PhotoOptions,
    QualityPrioritization, SavedAsset, ScreenDimensions, TapPoint,
};

use crate::integrity::{hash_bytes, verify_hash};
use crate::traits::*;

// ---------------------------------------------------------------------------
// Bridge
// ---------------------------------------------------------------------------

/// Bridge returned on non-mobile platforms.
pub struct DesktopBridge {
    screen: ScreenDimensions,
    permission: Mutex<PermissionStatus>,
    auto_grant: bool,
    capture_dir: PathBuf,
    library: DirectoryMediaLibrary,
}

impl DesktopBridge {
    pub fn new(config: &AppConfig, capture_dir: PathBuf, library_dir: PathBuf) -> Self {
        Self {
            screen: config.screen,
            permission: Mutex::new(PermissionStatus::NotDetermined),
            auto_grant: config.auto_grant_permission,
            capture_dir,
            library: DirectoryMediaLibrary::new(library_dir),
        }
    }
}

impl PlatformBridge for DesktopBridge {
    fn platform_name(&self) -> &str {
        "Desktop (virtual camera)"
    }
}

impl CameraSubsystem for DesktopBridge {
    fn permission_status(&self) -> PermissionStatus {
        *self.permission.lock().unwrap_or_else(|e| e.into_inner())
    }

    #[instrument(skip(self))]
    fn request_permission(&self) -> Result<PermissionStatus> {
        let mut status = self.permission.lock().unwrap_or_else(|e| e.into_inner());
        if *status == PermissionStatus::NotDetermined {
            *status = if self.auto_grant {
                PermissionStatus::Granted
            } else {
                PermissionStatus::Denied
            };
            info!(status = ?*status, "camera permission answered");
        }
        Ok(*status)
    }

    #[instrument(skip(self))]
    fn device(&self, position: CameraPosition) -> Result<Option<Box<dyn CameraDevice>>> {
        match position {
            CameraPosition::Back | CameraPosition::Front => {
                let camera = VirtualCamera::new(position, self.capture_dir.clone(), self.screen);
                debug!(id = camera.id(), "virtual camera resolved");
                Ok(Some(Box::new(camera)))
            }
            CameraPosition::External => {
                warn!("no external camera on the desktop bridge");
                Ok(None)
            }
        }
    }
}

impl MediaLibrary for DesktopBridge {
    fn save_asset(&self, file: &CapturedFile, asset_type: AssetType) -> Result<SavedAsset> {
        self.library.save_asset(file, asset_type)
    }
}

impl DisplayInfo for DesktopBridge {
    fn screen_dimensions(&self) -> Result<ScreenDimensions> {
        ScreenDimensions::new(self.screen.width, self.screen.height)
    }
}

// ---------------------------------------------------------------------------
// Virtual camera
// ---------------------------------------------------------------------------

/// Synthetic camera that renders a gradient test pattern for every photo.
pub struct VirtualCamera {
    id: String,
    capture_dir: PathBuf,
    preview: ScreenDimensions,
    last_focus: Option<TapPoint>,
}

impl VirtualCamera {
    pub fn new(position: CameraPosition, capture_dir: PathBuf, preview: ScreenDimensions) -> Self {
        Self {
            id: format!("virtual-{position}"),
            capture_dir,
            preview,
            last_focus: None,
        }
    }

    /// The point the last successful focus call locked onto.
    pub fn last_focus(&self) -> Option<TapPoint> {
        self.last_focus
    }

    /// Render the test pattern, with a crosshair at the focus point if any.
    fn render(&self, width: u32, height: u32) -> RgbImage {
        let mut frame = RgbImage::from_fn(width, height, |x, y| {
            let r = (x * 255 / width.max(1)) as u8;
            let g = (y * 255 / height.max(1)) as u8;
            Rgb([r, g, 128])
        });

        if let Some(point) = self.last_focus {
            let fx = (point.x / self.preview.width * f64::from(width)) as u32;
            let fy = (point.y / self.preview.height * f64::from(height)) as u32;
            let fx = fx.min(width.saturating_sub(1));
            let fy = fy.min(height.saturating_sub(1));
            for x in 0..width {
                frame.put_pixel(x, fy, Rgb([255, 255, 255]));
            }
            for y in 0..height {
                frame.put_pixel(fx, y, Rgb([255, 255, 255]));
            }
        }

        frame
    }
}

/// Output resolution and JPEG quality for each prioritization.
pub fn capture_profile(quality: QualityPrioritization) -> (u32, u32, u8) {
    match quality {
        QualityPrioritization::Speed => (1280, 720, 70),
        QualityPrioritization::Balanced => (1920, 1080, 85),
        QualityPrioritization::Quality => (3840, 2160, 95),
    }
}

impl CameraDevice for VirtualCamera {
    fn id(&self) -> &str {
        &self.id
    }

    fn focus(&mut self, point: TapPoint) -> Result<()> {
        if !self.preview.contains(point) {
            return Err(CropcamError::Focus(format!(
                "point ({}, {}) is outside the {}x{} preview",
                point.x, point.y, self.preview.width, self.preview.height
            )));
        }
        debug!(x = point.x, y = point.y, "virtual camera focused");
        self.last_focus = Some(point);
        Ok(())
    }

    #[instrument(skip(self), fields(camera = %self.id))]
    fn take_photo(&mut self, options: &PhotoOptions) -> Result<CapturedFile> {
        let (width, height, jpeg_quality) = capture_profile(options.quality);
        fs::create_dir_all(&self.capture_dir)?;

        let frame = self.render(width, height);
        let path = self.capture_dir.join(format!("{}.jpg", Uuid::new_v4()));
        let mut writer = BufWriter::new(fs::File::create(&path)?);
        JpegEncoder::new_with_quality(&mut writer, jpeg_quality)
            .encode_image(&frame)
            .map_err(|e| CropcamError::ImageError(format!("jpeg encode: {e}")))?;
        writer.flush()?;

        info!(path = %path.display(), width, height, "photo written");
        Ok(CapturedFile {
            path,
            width,
            height,
            captured_at: Utc::now(),
        })
    }
}

// ---------------------------------------------------------------------------
// Directory media library
// ---------------------------------------------------------------------------

/// Media library backed by a directory, e.g. `~/Pictures/Cropcam`.
pub struct DirectoryMediaLibrary {
    root: PathBuf,
}

impl DirectoryMediaLibrary {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl MediaLibrary for DirectoryMediaLibrary {
    /// Move the captured file into the library as
    /// `IMG_<timestamp>_<hash8>.<ext>`. The library takes ownership: the
    /// source is removed once the asset is stored. Saving bytes that are
    /// already in the library stores nothing new.
    #[instrument(skip(self, file), fields(src = %file.uri(), kind = asset_type.as_str()))]
    fn save_asset(&self, file: &CapturedFile, asset_type: AssetType) -> Result<SavedAsset> {
        let data = fs::read(&file.path).map_err(|e| {
            CropcamError::MediaLibrary(format!("read {}: {e}", file.path.display()))
        })?;
        let hash = hash_bytes(&data);

        let prefix = match asset_type {
            AssetType::Photo => "IMG",
            AssetType::Video => "VID",
        };
        let ext = file
            .path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("jpg");
        let name = format!(
            "{prefix}_{}_{}.{ext}",
            file.captured_at.format("%Y%m%d_%H%M%S"),
            &hash[..8]
        );

        fs::create_dir_all(&self.root)
            .map_err(|e| CropcamError::MediaLibrary(format!("create library dir: {e}")))?;
        let target = self.root.join(name);

        if target.exists() {
            let existing = fs::read(&target)
                .map_err(|e| CropcamError::MediaLibrary(format!("read existing asset: {e}")))?;
            verify_hash(&existing, &hash)?;
            debug!(path = %target.display(), "asset already in library");
        } else {
            fs::write(&target, &data)
                .map_err(|e| CropcamError::MediaLibrary(format!("write asset: {e}")))?;
            info!(path = %target.display(), bytes = data.len(), "asset saved");
        }

        if let Err(e) = fs::remove_file(&file.path) {
            warn!(path = %file.path.display(), error = %e, "could not remove captured file");
        }

        Ok(SavedAsset {
            id: hash,
            path: target,
            asset_type,
        })
    }
}
