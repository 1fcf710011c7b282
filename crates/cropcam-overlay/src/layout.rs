// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Complete overlay description: mask, dashed outline, and caption text.
//
// The UI draws these in order (mask, outline, caption). All three are derived
// from a single `Rect` so the cutout and the outline can never drift apart.

use cropcam_core::types::ScreenDimensions;
use tracing::trace;

use crate::geometry::{Rect, crop_region};
use crate::mask::MaskPath;

/// Corner radius of the dashed outline.
pub const OUTLINE_CORNER_RADIUS: f64 = 6.0;
/// Stroke width of the dashed outline.
pub const OUTLINE_STROKE_WIDTH: f64 = 6.0;
/// Dash pattern of the outline (dash, gap).
pub const OUTLINE_DASH: [f64; 2] = [50.0, 10.0];
/// Gap between the bottom of the crop guide and the caption anchor.
pub const CAPTION_GAP: f64 = 80.0;
/// Caption font size as a fraction of the smaller screen side.
pub const CAPTION_FONT_RATIO: f64 = 0.05;
/// Caption left margin as a fraction of the screen width.
pub const CAPTION_LEFT_RATIO: f64 = 0.05;
/// Line height in multiples of the font size.
pub const CAPTION_LINE_HEIGHT: f64 = 1.2;

/// Styling knobs that do not affect geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayStyle {
    /// Opacity of the black mask, clamped to 0.0–1.0.
    pub mask_opacity: f64,
    pub stroke_color: &'static str,
    pub text_color: &'static str,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            mask_opacity: 0.5,
            stroke_color: "white",
            text_color: "white",
        }
    }
}

impl OverlayStyle {
    /// CSS colour for the mask fill.
    pub fn mask_fill(&self) -> String {
        format!("rgba(0, 0, 0, {})", self.mask_opacity.clamp(0.0, 1.0))
    }
}

/// Dashed, rounded rectangle drawn on top of the crop guide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outline {
    pub rect: Rect,
    pub corner_radius: f64,
    pub stroke_width: f64,
    pub dash: [f64; 2],
}

impl Outline {
    /// SVG `stroke-dasharray` value.
    pub fn dash_array(&self) -> String {
        format!("{} {}", self.dash[0], self.dash[1])
    }
}

/// One positioned line of caption text.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionLine {
    pub text: String,
    /// Baseline position.
    pub y: f64,
}

/// Instruction text placed under the crop guide.
#[derive(Debug, Clone, PartialEq)]
pub struct Caption {
    pub x: f64,
    pub font_size: f64,
    pub lines: Vec<CaptionLine>,
}

/// Everything the UI needs to draw the crop guide.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    pub screen: ScreenDimensions,
    pub crop: Rect,
    pub mask: MaskPath,
    pub outline: Outline,
    pub caption: Caption,
    pub style: OverlayStyle,
}

impl Overlay {
    /// Lay out the overlay for `screen`.
    pub fn compute(screen: ScreenDimensions, caption_lines: &[String], style: OverlayStyle) -> Self {
        let crop = crop_region(screen);

        let mask = MaskPath::new(Rect::full(screen), crop);
        let outline = Outline {
            rect: crop,
            corner_radius: OUTLINE_CORNER_RADIUS,
            stroke_width: OUTLINE_STROKE_WIDTH,
            dash: OUTLINE_DASH,
        };
        let caption = layout_caption(screen, crop, caption_lines);

        trace!(
            width = screen.width,
            height = screen.height,
            crop_x = crop.x,
            crop_y = crop.y,
            crop_w = crop.width,
            crop_h = crop.height,
            "overlay laid out"
        );

        Self {
            screen,
            crop,
            mask,
            outline,
            caption,
            style,
        }
    }
}

/// Anchor the caption block `CAPTION_GAP` below the crop guide. The first
/// line sits one line-height above the anchor and each further line one
/// line-height below the previous.
fn layout_caption(screen: ScreenDimensions, crop: Rect, lines: &[String]) -> Caption {
    let font_size = screen.min_side() * CAPTION_FONT_RATIO;
    let step = CAPTION_LINE_HEIGHT * font_size;
    let anchor = crop.bottom() + CAPTION_GAP;
    let first = anchor - step;

    let lines = lines
        .iter()
        .enumerate()
        .map(|(i, text)| CaptionLine {
            text: text.clone(),
            y: first + step * i as f64,
        })
        .collect();

    Caption {
        x: screen.width * CAPTION_LEFT_RATIO,
        font_size,
        lines,
    }
}
