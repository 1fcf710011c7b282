// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error notices for the capture screen.
//
// Every technical error is mapped to a short plain-language message with a
// suggestion. The severity drives the colour of the dismissible notice.

use crate::error::CropcamError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Try again and it will probably work.
    Transient,
    /// User must do something (grant access, free storage).
    ActionRequired,
    /// Retrying or user action will not help.
    Permanent,
}

/// A human-readable error with plain message and actionable suggestion.
#[derive(Debug, Clone, PartialEq)]
pub struct HumanError {
    /// Short summary (shown as a heading).
    pub message: String,
    /// What the user should try (shown as body text).
    pub suggestion: String,
    /// Whether pressing the shutter again is worth it.
    pub retriable: bool,
    /// Severity level (drives colour in UI).
    pub severity: Severity,
}

/// Convert a `CropcamError` into a `HumanError` for the notice banner.
pub fn humanize_error(err: &CropcamError) -> HumanError {
    match err {
        CropcamError::InvalidDimensions { .. } => HumanError {
            message: "The screen size couldn't be read.".into(),
            suggestion: "Restart the app.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },

        CropcamError::PermissionDenied => HumanError {
            message: "The app isn't allowed to use the camera.".into(),
            suggestion: "Allow camera access in your device settings, then reopen the app.".into(),
            retriable: false,
            severity: Severity::ActionRequired,
        },

        CropcamError::NoCameraDevice => HumanError {
            message: "No camera was found.".into(),
            suggestion: "This device doesn't seem to have a usable camera.".into(),
            retriable: false,
            severity: Severity::Permanent,
        },

        CropcamError::CameraNotReady => HumanError {
            message: "The camera isn't ready yet.".into(),
            suggestion: "Wait a moment and try again.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        CropcamError::Focus(_) => HumanError {
            message: "The camera couldn't focus there.".into(),
            suggestion: "Tap somewhere else in the preview.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        CropcamError::Capture(_) => HumanError {
            message: "The photo couldn't be taken.".into(),
            suggestion: "Hold the device steady and press the button again.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        CropcamError::CaptureInProgress => HumanError {
            message: "Still taking the previous photo.".into(),
            suggestion: "Wait for it to finish, then press the button again.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        CropcamError::MediaLibrary(_) => HumanError {
            message: "The photo couldn't be saved to your gallery.".into(),
            suggestion: "Check that the app may add photos and that the device has free space.".into(),
            retriable: true,
            severity: Severity::ActionRequired,
        },

        CropcamError::ImageError(_) => HumanError {
            message: "The photo couldn't be processed.".into(),
            suggestion: "Press the button again.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        CropcamError::Io(io_err) => {
            if io_err.kind() == std::io::ErrorKind::PermissionDenied {
                HumanError {
                    message: "The app doesn't have permission to write the photo.".into(),
                    suggestion: "Check the storage permissions for this app.".into(),
                    retriable: false,
                    severity: Severity::ActionRequired,
                }
            } else {
                HumanError {
                    message: "There was a problem writing the photo.".into(),
                    suggestion: "Try again. If this keeps happening, your device's storage may be full.".into(),
                    retriable: true,
                    severity: Severity::Transient,
                }
            }
        }

        CropcamError::Serialization(_) => HumanError {
            message: "The app had an internal data problem.".into(),
            suggestion: "Try again. If this keeps happening, please report it.".into(),
            retriable: true,
            severity: Severity::Transient,
        },

        CropcamError::Bridge(_) => HumanError {
            message: "A device-specific feature didn't work.".into(),
            suggestion: "Try restarting the app.".into(),
            retriable: true,
            severity: Severity::Transient,
        },
    }
}
