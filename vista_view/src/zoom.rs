// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoom about an anchor point.
//!
//! Every zoom in Vista (wheel, pinch, click, keyboard, API) goes through
//! [`zoom_to_point`]; the callers differ only in how they pick the anchor
//! and the target scale.

use kurbo::Point;

use crate::{Transform, ZoomLimits};

/// Scale changes smaller than this are dropped.
///
/// Repeated zooms against a limit would otherwise nudge the translation by
/// floating point noise on every event.
pub const ZOOM_CHANGE_THRESHOLD: f64 = 0.001;

/// Zooms `transform` to `target_scale`, keeping `anchor` fixed in the viewport.
///
/// The target is clamped into `limits`. If the clamped scale differs from the
/// current one by less than [`ZOOM_CHANGE_THRESHOLD`], `transform` is returned
/// unchanged.
///
/// ```
/// use kurbo::{Point, Vec2};
/// use vista_view::{Transform, ZoomLimits, zoom_to_point};
///
/// let t = zoom_to_point(
///     Transform::IDENTITY,
///     Point::new(400.0, 300.0),
///     2.0,
///     ZoomLimits::new(0.05, 80.0),
/// );
/// assert_eq!(t, Transform::new(2.0, Vec2::new(-400.0, -300.0)));
/// ```
#[must_use]
pub fn zoom_to_point(
    transform: Transform,
    anchor: Point,
    target_scale: f64,
    limits: ZoomLimits,
) -> Transform {
    if !transform.is_invertible() {
        return transform;
    }
    zoom_by_factor(transform, anchor, target_scale / transform.scale, limits)
}

/// Multiplies the scale of `transform` by `factor` around `anchor`.
///
/// This is the factor form of [`zoom_to_point`], used when the input is a
/// ratio (a wheel notch or a pinch distance change) instead of a level.
/// Non‑positive or non‑finite factors leave the transform untouched.
#[must_use]
pub fn zoom_by_factor(
    transform: Transform,
    anchor: Point,
    factor: f64,
    limits: ZoomLimits,
) -> Transform {
    if !(factor.is_finite() && factor > 0.0) || !transform.is_invertible() {
        return transform;
    }
    let old_scale = transform.scale;
    let new_scale = limits.clamp(old_scale * factor);
    if (new_scale - old_scale).abs() < ZOOM_CHANGE_THRESHOLD {
        return transform;
    }

    let content = transform.to_content(anchor);
    Transform {
        scale: new_scale,
        translate: anchor.to_vec2() - content.to_vec2() * new_scale,
    }
}
