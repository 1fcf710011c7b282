// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Dimming mask: a full-screen rectangle with the crop guide cut out.
//
// Drawn as a single SVG path with two sub-paths and `fill-rule="evenodd"`, so
// only the area outside the cutout is filled.

use std::fmt::Write;

use crate::geometry::Rect;

/// Full-screen mask with a rectangular hole.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaskPath {
    pub outer: Rect,
    pub cutout: Rect,
}

impl MaskPath {
    pub fn new(outer: Rect, cutout: Rect) -> Self {
        Self { outer, cutout }
    }

    /// SVG path data for the mask.
    ///
    /// `M0 0 h{w} v{h} h-{w} v-{h} M{x} {y} h{cw} v{ch} h-{cw} Z`
    pub fn path_data(&self) -> String {
        let mut d = String::with_capacity(96);
        let o = &self.outer;
        let c = &self.cutout;
        // Writing to a String never fails.
        let _ = write!(
            d,
            "M{} {} h{} v{} h-{} v-{} M{} {} h{} v{} h-{} Z",
            o.x, o.y, o.width, o.height, o.width, o.height, c.x, c.y, c.width, c.height, c.width,
        );
        d
    }

    /// Fill rule the path must be drawn with.
    pub fn fill_rule(&self) -> &'static str {
        "evenodd"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_for_reference_screen() {
        let mask = MaskPath::new(
            Rect::new(0.0, 0.0, 1000.0, 2000.0),
            Rect::new(3.0, 500.0, 994.0, 800.0),
        );
        assert_eq!(
            mask.path_data(),
            "M0 0 h1000 v2000 h-1000 v-2000 M3 500 h994 v800 h-994 Z"
        );
    }

    #[test]
    fn fractional_coordinates_are_kept() {
        let mask = MaskPath::new(
            Rect::new(0.0, 0.0, 390.0, 844.0),
            Rect::new(3.0, 211.0, 384.0, 337.6),
        );
        assert!(mask.path_data().contains("v337.6"));
    }
}
