// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Camera page — full-screen preview, crop guide and shutter button.
//
// Taps on the preview are forwarded to the camera for focus. The shutter
// takes a photo and saves it to the media library; failures show up as a
// dismissible notice.

use dioxus::prelude::*;

use cropcam_core::error::CropcamError;
use cropcam_core::human_errors::{HumanError, Severity, humanize_error};
use cropcam_core::types::{SessionState, TapPoint};
use cropcam_overlay::{Overlay, OverlayStyle};

use crate::services::app_services::AppServices;
use crate::state::AppState;

#[component]
pub fn CameraScreen() -> Element {
    let svc = use_context::<AppServices>();
    let mut state = use_context::<Signal<AppState>>();

    // Mount once for the lifetime of the screen.
    use_hook({
        let controller = svc.controller();
        move || {
            spawn(async move {
                match controller.mount().await {
                    Ok(session) => state.write().session = session,
                    Err(e) => {
                        tracing::error!(error = %e, "capture session failed to start");
                        let mut s = state.write();
                        s.session = controller.state();
                        s.notice = Some(humanize_error(&e));
                    }
                }
            });
        }
    });

    use_drop({
        let controller = svc.controller();
        move || controller.unmount()
    });

    let screen = match svc.controller().screen_dimensions() {
        Ok(screen) => screen,
        Err(e) => {
            tracing::warn!(error = %e, "screen size unavailable");
            return rsx! { Unavailable {} };
        }
    };

    let session = state.read().session;
    if session == SessionState::Unavailable {
        return rsx! { Unavailable {} };
    }

    let overlay = {
        let config = state.read().config.clone();
        Overlay::compute(
            screen,
            &config.caption_lines,
            OverlayStyle {
                mask_opacity: config.mask_opacity,
                ..OverlayStyle::default()
            },
        )
    };

    let saved_label = state
        .read()
        .last_saved
        .as_ref()
        .map(|asset| asset.path.display().to_string());
    let controller = svc.controller();

    rsx! {
        div {
            style: "position: relative; width: {screen.width}px; height: {screen.height}px; margin: 0 auto; overflow: hidden;",

            // Preview surface; receives taps for focus
            div {
                style: "position: absolute; inset: 0; background: linear-gradient(160deg, #2c3e50, #4b6584);",
                onclick: move |evt: MouseEvent| {
                    let p = evt.element_coordinates();
                    tracing::debug!(x = p.x, y = p.y, "preview tapped");
                    controller.focus(TapPoint::new(p.x, p.y));
                },
            }

            CropArea { overlay }

            if session == SessionState::AwaitingPermission {
                p { style: "position: absolute; top: 48px; left: 0; right: 0; text-align: center; color: white; font-size: 14px;",
                    "Camera access is needed to take photos."
                }
            }

            if let Some(path) = saved_label {
                p { style: "position: absolute; top: 16px; left: 0; right: 0; text-align: center; color: #d0ffd0; font-size: 12px;",
                    "Saved {path}"
                }
            }

            if let Some(notice) = state.read().notice.clone() {
                Notice { notice }
            }

            CaptureButton {}
        }
    }
}

/// Dimmed mask, dashed outline and caption drawn over the preview.
#[component]
fn CropArea(overlay: Overlay) -> Element {
    let outline = overlay.outline;
    let crop = outline.rect;
    let caption = overlay.caption.clone();

    rsx! {
        svg {
            width: "{overlay.screen.width}",
            height: "{overlay.screen.height}",
            style: "position: absolute; top: 0; left: 0; pointer-events: none;",

            path {
                d: overlay.mask.path_data(),
                fill: overlay.style.mask_fill(),
                fill_rule: overlay.mask.fill_rule(),
            }
            rect {
                x: "{crop.x}",
                y: "{crop.y}",
                width: "{crop.width}",
                height: "{crop.height}",
                rx: "{outline.corner_radius}",
                fill: "none",
                stroke: overlay.style.stroke_color,
                stroke_width: "{outline.stroke_width}",
                stroke_dasharray: outline.dash_array(),
            }
            for line in caption.lines.iter() {
                text {
                    x: "{caption.x}",
                    y: "{line.y}",
                    fill: overlay.style.text_color,
                    font_size: "{caption.font_size}",
                    "{line.text}"
                }
            }
        }
    }
}

/// Round shutter button; disabled while a capture is running.
#[component]
fn CaptureButton() -> Element {
    let svc = use_context::<AppServices>();
    let mut state = use_context::<Signal<AppState>>();

    let ready = state.read().session.is_ready();
    let busy = state.read().capturing;
    let inner_opacity = if busy { 0.5 } else { 1.0 };

    rsx! {
        button {
            style: "position: absolute; bottom: 48px; left: calc(50% - 40px); width: 80px; height: 80px; border-radius: 40px; border: 3px solid white; background: transparent; padding: 0; display: flex; align-items: center; justify-content: center;",
            disabled: !ready || busy,
            onclick: move |_| {
                let controller = svc.controller();
                state.write().capturing = true;
                spawn(async move {
                    let result = controller.capture().await;
                    let mut s = state.write();
                    s.capturing = controller.is_capturing();
                    match result {
                        Ok(asset) => {
                            tracing::info!(id = %asset.id, "photo stored");
                            s.notice = None;
                            s.last_saved = Some(asset);
                        }
                        Err(CropcamError::CaptureInProgress) => {
                            tracing::debug!("shutter pressed during capture");
                        }
                        Err(e) => {
                            tracing::error!(error = %e, "capture failed");
                            s.notice = Some(humanize_error(&e));
                        }
                    }
                });
            },
            div {
                style: "width: 64px; height: 64px; border-radius: 32px; background: white; opacity: {inner_opacity};",
            }
        }
    }
}

#[component]
fn Notice(notice: HumanError) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let color = match notice.severity {
        Severity::Transient => "#ff9500",
        Severity::ActionRequired => "#007aff",
        Severity::Permanent => "#ff3b30",
    };

    rsx! {
        div {
            style: "position: absolute; top: 72px; left: 16px; right: 16px; padding: 12px; border-radius: 8px; background: white; border-left: 4px solid {color};",
            strong { "{notice.message}" }
            p { style: "color: #666; font-size: 14px; margin: 4px 0;", "{notice.suggestion}" }
            button {
                style: "padding: 6px 12px; border-radius: 6px; border: 1px solid #ccc; background: white; font-size: 13px;",
                onclick: move |_| state.write().notice = None,
                "Dismiss"
            }
        }
    }
}

/// Shown when no camera can be used at all.
#[component]
fn Unavailable() -> Element {
    rsx! {
        div { style: "height: 100vh; display: flex; align-items: center; justify-content: center; color: #aaa;",
            "No camera available."
        }
    }
}
