// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

use crate::{Transform, ZoomLimits};

/// Fraction of the viewport a fitted content plane occupies.
pub const FIT_PADDING: f64 = 0.9;

/// Fits the whole content plane into the viewport and centers it.
///
/// The fitted scale is `min(vw / cw, vh / ch) * FIT_PADDING`, clamped into
/// `limits`. Zero‑sized content or viewport leaves `current` untouched.
#[must_use]
pub fn fit_to_screen(
    current: Transform,
    viewport: Size,
    content: Size,
    limits: ZoomLimits,
) -> Transform {
    if !(content.width > 0.0 && content.height > 0.0) {
        return current;
    }
    if !(viewport.width > 0.0 && viewport.height > 0.0) {
        return current;
    }
    let sx = viewport.width / content.width;
    let sy = viewport.height / content.height;
    let scale = limits.clamp(sx.min(sy) * FIT_PADDING);
    centered(scale, viewport, content)
}

/// Centers the content plane in the viewport at the current scale.
#[must_use]
pub fn center_content(current: Transform, viewport: Size, content: Size) -> Transform {
    centered(current.scale, viewport, content)
}

fn centered(scale: f64, viewport: Size, content: Size) -> Transform {
    Transform::new(
        scale,
        Vec2::new(
            (viewport.width - content.width * scale) / 2.0,
            (viewport.height - content.height * scale) / 2.0,
        ),
    )
}

/// Pans so that `content_pt` sits at the center of the viewport.
///
/// Scale is preserved.
#[must_use]
pub fn center_on_point(current: Transform, viewport: Size, content_pt: Point) -> Transform {
    let center = viewport.to_vec2() / 2.0;
    current.with_translate(center - content_pt.to_vec2() * current.scale)
}
