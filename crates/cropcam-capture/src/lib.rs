// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Cropcam — camera actor and capture controller.
//
// The camera device is owned by a single actor thread. Everything else (UI
// event handlers, async tasks) talks to it through a `CameraHandle`.

pub mod actor;
pub mod controller;

#[cfg(test)]
mod fake;

pub use actor::{CameraCommand, CameraHandle};
pub use controller::{CaptureController, CaptureSettings};
