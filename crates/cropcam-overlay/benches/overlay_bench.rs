// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for overlay layout and mask path generation in the
// cropcam-overlay crate. The overlay is recomputed on every render, so both
// need to stay well under a frame budget.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use cropcam_core::types::ScreenDimensions;
use cropcam_overlay::{Overlay, OverlayStyle, crop_region};

fn bench_crop_region(c: &mut Criterion) {
    let screen = ScreenDimensions::new(1080.0, 2340.0).expect("valid screen");
    c.bench_function("crop_region", |b| {
        b.iter(|| crop_region(black_box(screen)))
    });
}

fn bench_overlay_compute(c: &mut Criterion) {
    let screen = ScreenDimensions::new(1080.0, 2340.0).expect("valid screen");
    let lines = vec![
        "Keep the subject".to_string(),
        "inside the frame.".to_string(),
    ];
    c.bench_function("overlay_compute", |b| {
        b.iter(|| Overlay::compute(black_box(screen), black_box(&lines), OverlayStyle::default()))
    });
}

fn bench_mask_path_data(c: &mut Criterion) {
    let screen = ScreenDimensions::new(390.0, 844.0).expect("valid screen");
    let overlay = Overlay::compute(screen, &[], OverlayStyle::default());
    c.bench_function("mask_path_data", |b| {
        b.iter(|| black_box(&overlay.mask).path_data())
    });
}

criterion_group!(
    benches,
    bench_crop_region,
    bench_overlay_compute,
    bench_mask_path_data
);
criterion_main!(benches);
