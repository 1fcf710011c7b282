// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Camera actor: one OS thread that exclusively owns the device handle.
//
// The device is resolved on the actor thread and never leaves it. Callers on
// any other thread or task send `CameraCommand`s; commands run one at a time
// in arrival order. Dropping every `CameraHandle` closes the channel, the
// thread exits, and the device is released.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use cropcam_bridge::traits::{CameraDevice, CameraSubsystem, PlatformBridge};
use cropcam_core::error::{CropcamError, Result};
use cropcam_core::types::{CameraPosition, CapturedFile, PhotoOptions, TapPoint};

/// Name given to the actor thread.
const ACTOR_THREAD_NAME: &str = "camera-actor";

/// Messages accepted by the camera actor.
#[derive(Debug)]
pub enum CameraCommand {
    /// Focus at a preview coordinate. No reply; failures are logged.
    Focus(TapPoint),
    /// Take a photo and reply with the written file.
    TakePhoto {
        options: PhotoOptions,
        reply: oneshot::Sender<Result<CapturedFile>>,
    },
}

/// Cloneable sender side of the camera actor.
#[derive(Clone)]
pub struct CameraHandle {
    tx: mpsc::UnboundedSender<CameraCommand>,
    device_id: Arc<str>,
}

impl std::fmt::Debug for CameraHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraHandle")
            .field("device_id", &self.device_id)
            .field("closed", &self.tx.is_closed())
            .finish()
    }
}

impl CameraHandle {
    /// Start the actor thread and resolve the camera at `position` on it.
    ///
    /// Returns Ok(None) when the platform has no such camera; the thread has
    /// already exited in that case.
    pub async fn spawn(
        bridge: Arc<dyn PlatformBridge>,
        position: CameraPosition,
    ) -> Result<Option<Self>> {
        let (tx, rx) = mpsc::unbounded_channel();
        let (ready_tx, ready_rx) = oneshot::channel();

        std::thread::Builder::new()
            .name(ACTOR_THREAD_NAME.into())
            .spawn(move || run(bridge, position, rx, ready_tx))?;

        let device_id = ready_rx
            .await
            .map_err(|_| CropcamError::Bridge("camera actor exited during startup".into()))??;

        Ok(device_id.map(|id| Self {
            tx,
            device_id: id.into(),
        }))
    }

    /// Identifier of the device the actor owns.
    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    /// Queue a focus request. Returns once the command is queued, not when
    /// the camera has focused.
    pub fn focus(&self, point: TapPoint) -> Result<()> {
        self.tx
            .send(CameraCommand::Focus(point))
            .map_err(|_| CropcamError::CameraNotReady)
    }

    /// Ask the actor for a photo and wait for the file.
    pub async fn take_photo(&self, options: PhotoOptions) -> Result<CapturedFile> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(CameraCommand::TakePhoto { options, reply })
            .map_err(|_| CropcamError::CameraNotReady)?;
        rx.await.map_err(|_| CropcamError::CameraNotReady)?
    }
}

/// Actor loop. Runs until every `CameraHandle` is dropped.
fn run(
    bridge: Arc<dyn PlatformBridge>,
    position: CameraPosition,
    mut rx: mpsc::UnboundedReceiver<CameraCommand>,
    ready: oneshot::Sender<Result<Option<String>>>,
) {
    let mut device = match bridge.device(position) {
        Ok(Some(device)) => device,
        Ok(None) => {
            warn!(%position, "no camera at requested position");
            let _ = ready.send(Ok(None));
            return;
        }
        Err(e) => {
            let _ = ready.send(Err(e));
            return;
        }
    };

    info!(device = device.id(), %position, "camera actor started");
    if ready.send(Ok(Some(device.id().to_owned()))).is_err() {
        debug!("mount abandoned before camera became ready");
        return;
    }

    while let Some(command) = rx.blocking_recv() {
        match command {
            CameraCommand::Focus(point) => {
                if let Err(e) = device.focus(point) {
                    debug!(error = %e, x = point.x, y = point.y, "focus ignored");
                }
            }
            CameraCommand::TakePhoto { options, reply } => {
                let result = device.take_photo(&options);
                if reply.send(result).is_err() {
                    debug!("capture caller went away before the photo was ready");
                }
            }
        }
    }

    info!(device = device.id(), "camera actor stopped");
}
