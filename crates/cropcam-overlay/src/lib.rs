// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Cropcam — crop-guide overlay geometry.
//
// The overlay is purely visual: it tells the user where to frame the subject
// and never changes what the camera captures.

pub mod geometry;
pub mod layout;
pub mod mask;

pub use geometry::{Rect, crop_region};
pub use layout::{Caption, CaptionLine, Outline, Overlay, OverlayStyle};
pub use mask::MaskPath;
