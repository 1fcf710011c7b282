// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Recording fake of the platform bridge for controller and actor tests.

use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use chrono::Utc;

use cropcam_bridge::traits::*;
use cropcam_core::error::{CropcamError, Result};
use cropcam_core::types::{
    AssetType, CameraPosition, CapturedFile, PermissionStatus, PhotoOptions, SavedAsset,
    ScreenDimensions, TapPoint,
};

/// Everything the fake has been asked to do.
#[derive(Debug, Default, Clone)]
pub struct Calls {
    pub permission_requests: u32,
    pub actor_threads: Vec<String>,
    pub focus: Vec<TapPoint>,
    pub photos: u32,
    pub photo_options: Vec<PhotoOptions>,
    pub saves: Vec<(PathBuf, AssetType)>,
    /// Devices dropped by the actor thread.
    pub devices_released: u32,
}

#[derive(Debug)]
struct Behaviour {
    permission: PermissionStatus,
    grant_on_request: bool,
    has_device: bool,
    fail_focus: bool,
    fail_capture: bool,
    capture_delay: Duration,
    fail_save: bool,
    /// Permission requests still to fail before one succeeds.
    failing_permission_requests: u32,
    permission_delay: Duration,
}

pub struct FakeBridge {
    behaviour: Arc<Mutex<Behaviour>>,
    calls: Arc<Mutex<Calls>>,
}

impl FakeBridge {
    fn with(behaviour: Behaviour) -> Arc<Self> {
        Arc::new(Self {
            behaviour: Arc::new(Mutex::new(behaviour)),
            calls: Arc::new(Mutex::new(Calls::default())),
        })
    }

    /// Permission already granted, back camera present.
    pub fn granted() -> Arc<Self> {
        Self::with(Behaviour {
            permission: PermissionStatus::Granted,
            grant_on_request: true,
            has_device: true,
            fail_focus: false,
            fail_capture: false,
            capture_delay: Duration::ZERO,
            fail_save: false,
            failing_permission_requests: 0,
            permission_delay: Duration::ZERO,
        })
    }

    /// Permission not asked yet; the request succeeds when `grant` is set.
    pub fn undetermined(grant: bool) -> Arc<Self> {
        Self::with(Behaviour {
            permission: PermissionStatus::NotDetermined,
            grant_on_request: grant,
            has_device: true,
            fail_focus: false,
            fail_capture: false,
            capture_delay: Duration::ZERO,
            fail_save: false,
            failing_permission_requests: 0,
            permission_delay: Duration::ZERO,
        })
    }

    /// Permission granted but no camera hardware.
    pub fn without_device() -> Arc<Self> {
        Self::with(Behaviour {
            permission: PermissionStatus::Granted,
            grant_on_request: true,
            has_device: false,
            fail_focus: false,
            fail_capture: false,
            capture_delay: Duration::ZERO,
            fail_save: false,
            failing_permission_requests: 0,
            permission_delay: Duration::ZERO,
        })
    }

    pub fn set_fail_focus(&self, fail: bool) {
        self.behaviour().fail_focus = fail;
    }

    pub fn set_fail_capture(&self, fail: bool) {
        self.behaviour().fail_capture = fail;
    }

    pub fn set_capture_delay(&self, delay: Duration) {
        self.behaviour().capture_delay = delay;
    }

    pub fn set_fail_save(&self, fail: bool) {
        self.behaviour().fail_save = fail;
    }

    /// Make the next `count` permission requests error out.
    pub fn fail_permission_requests(&self, count: u32) {
        self.behaviour().failing_permission_requests = count;
    }

    /// Keep the permission prompt open this long before answering.
    pub fn set_permission_delay(&self, delay: Duration) {
        self.behaviour().permission_delay = delay;
    }

    /// Forget the granted permission, as if the user revoked it.
    pub fn revoke(&self) {
        self.behaviour().permission = PermissionStatus::NotDetermined;
    }

    /// Snapshot of recorded calls.
    pub fn calls(&self) -> Calls {
        lock(&self.calls).clone()
    }

    fn behaviour(&self) -> MutexGuard<'_, Behaviour> {
        lock(&self.behaviour)
    }
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|e| e.into_inner())
}

impl PlatformBridge for FakeBridge {
    fn platform_name(&self) -> &str {
        "fake"
    }
}

impl CameraSubsystem for FakeBridge {
    fn permission_status(&self) -> PermissionStatus {
        self.behaviour().permission
    }

    fn request_permission(&self) -> Result<PermissionStatus> {
        lock(&self.calls).permission_requests += 1;
        let delay = self.behaviour().permission_delay;
        std::thread::sleep(delay);

        let mut b = self.behaviour();
        if b.failing_permission_requests > 0 {
            b.failing_permission_requests -= 1;
            return Err(CropcamError::Bridge("fake permission prompt crashed".into()));
        }
        b.permission = if b.grant_on_request {
            PermissionStatus::Granted
        } else {
            PermissionStatus::Denied
        };
        Ok(b.permission)
    }

    fn device(&self, position: CameraPosition) -> Result<Option<Box<dyn CameraDevice>>> {
        let thread = std::thread::current().name().unwrap_or("unnamed").to_string();
        lock(&self.calls).actor_threads.push(thread);
        if !self.behaviour().has_device {
            return Ok(None);
        }
        Ok(Some(Box::new(FakeDevice {
            id: format!("fake-{position}"),
            behaviour: Arc::clone(&self.behaviour),
            calls: Arc::clone(&self.calls),
        })))
    }
}

impl MediaLibrary for FakeBridge {
    fn save_asset(&self, file: &CapturedFile, asset_type: AssetType) -> Result<SavedAsset> {
        lock(&self.calls)
            .saves
            .push((file.path.clone(), asset_type));
        if self.behaviour().fail_save {
            return Err(CropcamError::MediaLibrary("fake library is full".into()));
        }
        Ok(SavedAsset {
            id: "0".repeat(64),
            path: PathBuf::from("/library").join(file.path.file_name().unwrap_or_default()),
            asset_type,
        })
    }
}

impl DisplayInfo for FakeBridge {
    fn screen_dimensions(&self) -> Result<ScreenDimensions> {
        ScreenDimensions::new(1000.0, 2000.0)
    }
}

struct FakeDevice {
    id: String,
    behaviour: Arc<Mutex<Behaviour>>,
    calls: Arc<Mutex<Calls>>,
}

impl Drop for FakeDevice {
    fn drop(&mut self) {
        lock(&self.calls).devices_released += 1;
    }
}

impl CameraDevice for FakeDevice {
    fn id(&self) -> &str {
        &self.id
    }

    fn focus(&mut self, point: TapPoint) -> Result<()> {
        lock(&self.calls).focus.push(point);
        if lock(&self.behaviour).fail_focus {
            return Err(CropcamError::Focus("fake focus failure".into()));
        }
        Ok(())
    }

    fn take_photo(&mut self, options: &PhotoOptions) -> Result<CapturedFile> {
        let (delay, fail) = {
            let b = lock(&self.behaviour);
            (b.capture_delay, b.fail_capture)
        };
        std::thread::sleep(delay);

        let n = {
            let mut calls = lock(&self.calls);
            calls.photos += 1;
            calls.photo_options.push(*options);
            calls.photos
        };
        if fail {
            return Err(CropcamError::Capture("fake sensor error".into()));
        }
        Ok(CapturedFile {
            path: PathBuf::from(format!("/fake/photo-{n}.jpg")),
            width: 640,
            height: 480,
            captured_at: Utc::now(),
        })
    }
}
