// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Crop rectangle derived from the screen dimensions.

use cropcam_core::types::ScreenDimensions;

/// Horizontal gap between the crop guide and each screen edge.
pub const CROP_MARGIN_X: f64 = 3.0;

/// Screen height is divided by this to get the crop guide's height.
pub const CROP_HEIGHT_DIVISOR: f64 = 2.5;

/// Screen height is divided by this to get the crop guide's top offset.
pub const CROP_TOP_DIVISOR: f64 = 4.0;

/// Axis-aligned rectangle in screen units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle covering the whole screen.
    pub fn full(screen: ScreenDimensions) -> Self {
        Self::new(0.0, 0.0, screen.width, screen.height)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Compute the crop guide for a screen.
///
/// Inset by [`CROP_MARGIN_X`] on the left and right, `height / 2.5` tall and
/// `height / 4` from the top. Screens narrower than both margins give a
/// zero-width guide rather than a negative one.
pub fn crop_region(screen: ScreenDimensions) -> Rect {
    Rect {
        x: CROP_MARGIN_X,
        y: screen.height / CROP_TOP_DIVISOR,
        width: (screen.width - 2.0 * CROP_MARGIN_X).max(0.0),
        height: screen.height / CROP_HEIGHT_DIVISOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen(w: f64, h: f64) -> ScreenDimensions {
        ScreenDimensions::new(w, h).unwrap()
    }

    #[test]
    fn reference_phone_screen() {
        let crop = crop_region(screen(1000.0, 2000.0));
        assert_eq!(crop, Rect::new(3.0, 500.0, 994.0, 800.0));
    }

    #[test]
    fn height_and_offset_follow_screen_height() {
        for h in [1.0, 480.0, 844.0, 1337.5, 2400.0] {
            let crop = crop_region(screen(390.0, h));
            assert_eq!(crop.height, h / 2.5);
            assert_eq!(crop.y, h / 4.0);
        }
    }

    #[test]
    fn margin_is_three_on_each_side() {
        for w in [6.0, 7.0, 320.0, 390.0, 1080.0, 4096.0] {
            let crop = crop_region(screen(w, 800.0));
            assert_eq!(crop.x, 3.0);
            assert_eq!(w - crop.right(), 3.0);
        }
    }

    #[test]
    fn tiny_screen_clamps_width() {
        let crop = crop_region(screen(4.0, 100.0));
        assert_eq!(crop.width, 0.0);
    }

    #[test]
    fn guide_stays_on_screen() {
        let s = screen(390.0, 844.0);
        let crop = crop_region(s);
        assert!(crop.bottom() < s.height);
        assert!(crop.right() <= s.width);
    }
}
