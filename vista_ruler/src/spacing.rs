// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Pixels per tick the spacing aims for.
pub const TARGET_TICK_PIXELS: f64 = 50.0;

/// Fewest ticks a ruler aims to show.
pub const MIN_TARGET_TICKS: f64 = 5.0;

/// Most ticks a ruler aims to show.
pub const MAX_TARGET_TICKS: f64 = 20.0;

/// Picks a "nice" tick spacing (`1`, `2` or `5` times a power of ten), in
/// content units, for `content_span` units laid out over `pixel_span` pixels.
///
/// The ruler aims for one tick every [`TARGET_TICK_PIXELS`], bounded to
/// between [`MIN_TARGET_TICKS`] and [`MAX_TARGET_TICKS`] ticks. The raw
/// spacing is rounded *up* to the next nice value.
///
/// Non‑finite or non‑positive spans return `1.0`.
///
/// ```
/// use vista_ruler::tick_spacing;
///
/// // 1000 units over 1000 px: 20 ticks wanted, 50 units each.
/// assert_eq!(tick_spacing(1000.0, 1000.0), 50.0);
/// // 2000 units over 500 px: 10 ticks wanted, 200 units each.
/// assert_eq!(tick_spacing(2000.0, 500.0), 200.0);
/// ```
#[must_use]
pub fn tick_spacing(content_span: f64, pixel_span: f64) -> f64 {
    if !(content_span.is_finite() && content_span > 0.0) {
        return 1.0;
    }
    if !(pixel_span.is_finite() && pixel_span > 0.0) {
        return 1.0;
    }
    let target = (pixel_span / TARGET_TICK_PIXELS).clamp(MIN_TARGET_TICKS, MAX_TARGET_TICKS);
    let raw = content_span / target;
    let magnitude = libm::pow(10.0, libm::floor(libm::log10(raw)));
    let normalized = raw / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    let spacing = nice * magnitude;
    if spacing.is_finite() && spacing > 0.0 {
        spacing
    } else {
        1.0
    }
}
