// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Capture controller: session state machine, tap-to-focus and the
// capture-then-save sequence.
//
// State per mount:
//
//   Uninitialized --mount--> AwaitingPermission   (permission not granted)
//                 --mount--> Ready                (device resolved)
//                 --mount--> Unavailable          (no device)
//
// Focus and capture loop back to Ready. Only one capture may be in flight;
// a second press while one is running is rejected instead of reaching the
// device.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, error, info, instrument, warn};

use cropcam_bridge::traits::{CameraSubsystem, DisplayInfo, MediaLibrary, PlatformBridge};
use cropcam_core::AppConfig;
use cropcam_core::error::{CropcamError, Result};
use cropcam_core::types::{
    AssetType, CameraPosition, CaptureId, PhotoOptions, QualityPrioritization, SavedAsset,
    ScreenDimensions, SessionState, TapPoint,
};

use crate::actor::CameraHandle;

/// Camera selection and photo options for a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureSettings {
    pub position: CameraPosition,
    pub quality: QualityPrioritization,
}

impl Default for CaptureSettings {
    fn default() -> Self {
        Self {
            position: CameraPosition::Back,
            quality: QualityPrioritization::Speed,
        }
    }
}

impl From<&AppConfig> for CaptureSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            position: config.camera_position,
            quality: config.quality,
        }
    }
}

#[derive(Debug)]
struct Session {
    state: SessionState,
    camera: Option<CameraHandle>,
    /// Set for the duration of a mount, so repeated `mount()` calls do not
    /// ask for permission again.
    mounted: bool,
    /// Bumped on unmount; a mount that finishes under a stale generation is
    /// discarded.
    generation: u64,
}

struct Inner {
    bridge: Arc<dyn PlatformBridge>,
    settings: CaptureSettings,
    session: Mutex<Session>,
    capture_in_flight: AtomicBool,
}

/// Cheaply cloneable controller shared by the UI's event handlers.
#[derive(Clone)]
pub struct CaptureController {
    inner: Arc<Inner>,
}

/// Holds the single-flight flag; clears it on drop, whatever the outcome.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl CaptureController {
    pub fn new(bridge: Arc<dyn PlatformBridge>, settings: CaptureSettings) -> Self {
        Self {
            inner: Arc::new(Inner {
                bridge,
                settings,
                session: Mutex::new(Session {
                    state: SessionState::Uninitialized,
                    camera: None,
                    mounted: false,
                    generation: 0,
                }),
                capture_in_flight: AtomicBool::new(false),
            }),
        }
    }

    fn session(&self) -> MutexGuard<'_, Session> {
        self.inner.session.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Current session state.
    pub fn state(&self) -> SessionState {
        self.session().state
    }

    /// Name of the platform behind the bridge.
    pub fn platform_name(&self) -> &str {
        self.inner.bridge.platform_name()
    }

    /// Screen size as reported by the platform.
    pub fn screen_dimensions(&self) -> Result<ScreenDimensions> {
        self.inner.bridge.screen_dimensions()
    }

    /// Whether a capture is currently running.
    pub fn is_capturing(&self) -> bool {
        self.inner.capture_in_flight.load(Ordering::Acquire)
    }

    /// Bring the screen up: check permission (requesting it at most once per
    /// mount), then start the camera actor.
    ///
    /// Calling `mount` again on a mounted controller returns the current
    /// state without touching the platform.
    #[instrument(skip(self))]
    pub async fn mount(&self) -> Result<SessionState> {
        let generation = {
            let mut session = self.session();
            if session.mounted {
                return Ok(session.state);
            }
            session.mounted = true;
            session.generation
        };

        let bridge = Arc::clone(&self.inner.bridge);
        let mut status = bridge.permission_status();
        if !status.is_granted() {
            info!(?status, "requesting camera permission");
            let requester = Arc::clone(&bridge);
            let answer = tokio::task::spawn_blocking(move || requester.request_permission())
                .await
                .map_err(|e| CropcamError::Bridge(format!("permission request task: {e}")))
                .and_then(|answer| answer);
            status = match answer {
                Ok(status) => status,
                Err(e) => {
                    error!(error = %e, "camera permission request failed");
                    self.abandon(generation);
                    return Err(e);
                }
            };
        }

        if !status.is_granted() {
            warn!(?status, "camera permission not granted; preview stays inactive");
            return Ok(self.settle(generation, SessionState::AwaitingPermission, None));
        }

        match CameraHandle::spawn(bridge, self.inner.settings.position).await {
            Ok(Some(camera)) => {
                info!(device = camera.device_id(), "camera ready");
                Ok(self.settle(generation, SessionState::Ready, Some(camera)))
            }
            Ok(None) => {
                warn!(position = %self.inner.settings.position, "no camera device available");
                Ok(self.settle(generation, SessionState::Unavailable, None))
            }
            Err(e) => {
                error!(error = %e, "camera could not be opened");
                self.settle(generation, SessionState::Unavailable, None);
                Err(e)
            }
        }
    }

    /// Record the outcome of a mount unless it was unmounted meanwhile.
    fn settle(
        &self,
        generation: u64,
        state: SessionState,
        camera: Option<CameraHandle>,
    ) -> SessionState {
        let mut session = self.session();
        if session.generation != generation {
            debug!("mount finished after unmount; discarding");
            return session.state;
        }
        session.state = state;
        session.camera = camera;
        state
    }

    /// Undo `mount`'s claim on the session so the next `mount` starts over.
    fn abandon(&self, generation: u64) {
        let mut session = self.session();
        if session.generation == generation {
            session.mounted = false;
            session.state = SessionState::Uninitialized;
        }
    }

    /// Tear the session down. The camera actor stops once in-flight commands
    /// holding a handle finish.
    #[instrument(skip(self))]
    pub fn unmount(&self) {
        let mut session = self.session();
        session.generation += 1;
        session.mounted = false;
        session.camera = None;
        session.state = SessionState::Uninitialized;
        info!("capture screen unmounted");
    }

    /// Forward a tap to the camera, unmodified. Fire-and-forget: taps outside
    /// `Ready` are ignored and focus failures are only logged.
    pub fn focus(&self, point: TapPoint) {
        let session = self.session();
        let Some(camera) = session.camera.as_ref().filter(|_| session.state.is_ready()) else {
            debug!(x = point.x, y = point.y, state = ?session.state, "tap ignored");
            return;
        };
        if let Err(e) = camera.focus(point) {
            debug!(error = %e, "focus request dropped");
        }
    }

    /// Take a photo and save it to the media library as a photo asset.
    ///
    /// Rejects with `CaptureInProgress` while another capture is running, and
    /// with `PermissionDenied`, `NoCameraDevice` or `CameraNotReady` outside
    /// `Ready`. A failed photo aborts before anything is saved.
    #[instrument(skip(self), fields(capture_id = %CaptureId::new()))]
    pub async fn capture(&self) -> Result<SavedAsset> {
        let Some(_in_flight) = InFlight::acquire(&self.inner.capture_in_flight) else {
            warn!("capture already in progress; press ignored");
            return Err(CropcamError::CaptureInProgress);
        };

        let camera = {
            let session = self.session();
            match (&session.camera, session.state) {
                (Some(camera), SessionState::Ready) => camera.clone(),
                (_, SessionState::AwaitingPermission) => return Err(CropcamError::PermissionDenied),
                (_, SessionState::Unavailable) => return Err(CropcamError::NoCameraDevice),
                _ => return Err(CropcamError::CameraNotReady),
            }
        };

        let options = PhotoOptions {
            quality: self.inner.settings.quality,
        };
        let file = match camera.take_photo(options).await {
            Ok(file) => file,
            Err(e) => {
                error!(error = %e, "photo capture failed");
                return Err(e);
            }
        };
        info!(path = %file.path.display(), "photo captured");

        let bridge = Arc::clone(&self.inner.bridge);
        let saved = tokio::task::spawn_blocking(move || bridge.save_asset(&file, AssetType::Photo))
            .await
            .map_err(|e| CropcamError::Bridge(format!("media library task: {e}")))?;

        match saved {
            Ok(asset) => {
                info!(id = %asset.id, path = %asset.path.display(), "photo saved to media library");
                Ok(asset)
            }
            Err(e) => {
                error!(error = %e, "saving photo to media library failed");
                Err(e)
            }
        }
    }
}
