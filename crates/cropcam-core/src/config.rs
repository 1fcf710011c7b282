// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use serde::{Deserialize, Serialize};

use crate::types::{CameraPosition, QualityPrioritization, ScreenDimensions};

/// Persistent application settings.
///
/// Missing fields fall back to their defaults so older config files keep
/// loading after new settings are added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Which camera the capture screen opens.
    pub camera_position: CameraPosition,
    /// Speed/quality trade-off for each photo.
    pub quality: QualityPrioritization,
    /// Instruction text drawn under the crop guide, one entry per line.
    pub caption_lines: Vec<String>,
    /// Opacity of the dimming mask outside the crop guide (0.0–1.0).
    pub mask_opacity: f64,
    /// Display size reported by the desktop bridge.
    pub screen: ScreenDimensions,
    /// Desktop bridge only: grant camera permission when it is requested.
    pub auto_grant_permission: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            camera_position: CameraPosition::Back,
            quality: QualityPrioritization::Speed,
            caption_lines: vec![
                "Keep the subject".into(),
                "inside the frame.".into(),
            ],
            mask_opacity: 0.5,
            screen: ScreenDimensions {
                width: 390.0,
                height: 844.0,
            },
            auto_grant_permission: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_prefer_back_camera_and_speed() {
        let config = AppConfig::default();
        assert_eq!(config.camera_position, CameraPosition::Back);
        assert_eq!(config.quality, QualityPrioritization::Speed);
        assert_eq!(config.caption_lines.len(), 2);
    }

    #[test]
    fn default_caption_is_a_framing_hint() {
        let config = AppConfig::default();
        assert_eq!(config.caption_lines.join(" "), "Keep the subject inside the frame.");
    }

    #[test]
    fn json_round_trip() {
        let mut config = AppConfig::default();
        config.quality = QualityPrioritization::Quality;
        config.caption_lines = vec!["frame the tyre".into()];
        let json = serde_json::to_string(&config).unwrap();
        let back: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn partial_file_uses_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"mask_opacity": 0.7}"#).unwrap();
        assert_eq!(config.mask_opacity, 0.7);
        assert_eq!(config.camera_position, CameraPosition::Back);
        assert!(config.auto_grant_permission);
    }
}
