// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

/// Viewport area the configured speeds are tuned for (1920×1080).
pub const REFERENCE_DISPLAY_AREA: f64 = 1920.0 * 1080.0;

/// Exponent applied to the area ratio.
///
/// `0.5` scales speed with the viewport's linear size rather than its area.
pub const ADAPTIVE_ZOOM_EXPONENT: f64 = 0.5;

/// Scales `base` by how large the viewport is compared to a reference display.
///
/// `speed' = speed · (area / REFERENCE_DISPLAY_AREA) ^ ADAPTIVE_ZOOM_EXPONENT`.
/// An empty or non‑finite viewport returns `base` unchanged.
#[must_use]
pub fn adaptive_zoom_speed(base: f64, viewport: Size) -> f64 {
    let area = viewport.width * viewport.height;
    if !(area.is_finite() && area > 0.0) {
        return base;
    }
    base * libm::pow(area / REFERENCE_DISPLAY_AREA, ADAPTIVE_ZOOM_EXPONENT)
}
