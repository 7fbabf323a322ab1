// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

use crate::{Transform, ZoomLimits};

/// Returns the part of the content plane visible through the viewport.
///
/// The viewport corners are mapped into content space and intersected with
/// `[0, content.width] × [0, content.height]`. Extents never go negative:
/// once the view has been panned past an edge the area collapses to zero
/// width or height on that side, which callers should read as "edge
/// reached".
#[must_use]
pub fn visible_area(viewport: Size, content: Size, transform: &Transform) -> Rect {
    let viewport = non_negative(viewport);
    let content = non_negative(content);
    let top_left = transform.to_content(Point::ZERO);
    let bottom_right = transform.to_content(Point::new(viewport.width, viewport.height));

    let x0 = clamp_axis(top_left.x.min(bottom_right.x), content.width);
    let x1 = clamp_axis(top_left.x.max(bottom_right.x), content.width);
    let y0 = clamp_axis(top_left.y.min(bottom_right.y), content.height);
    let y1 = clamp_axis(top_left.y.max(bottom_right.y), content.height);

    Rect::new(x0, y0, x0 + (x1 - x0).max(0.0), y0 + (y1 - y0).max(0.0))
}

fn clamp_axis(v: f64, extent: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.max(0.0).min(extent) }
}

fn non_negative(size: Size) -> Size {
    let fix = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
    Size::new(fix(size.width), fix(size.height))
}

/// Snapshot of the view geometry derived from a transform.
///
/// Every field is recomputed by [`Bounds::compute`]; nothing here is meant to
/// be cached across transform changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    /// Canvas (viewport) size in pixels.
    pub viewport: Size,
    /// Unscaled content size.
    pub content: Size,
    /// The transform the snapshot was taken from.
    pub transform: Transform,
    /// Visible region in content coordinates, see [`visible_area`].
    pub visible_area: Rect,
    /// Content size after scaling.
    pub scaled_content: Size,
    /// Content extends past the left edge of the viewport.
    pub can_pan_left: bool,
    /// Content extends past the right edge of the viewport.
    pub can_pan_right: bool,
    /// Content extends past the top edge of the viewport.
    pub can_pan_up: bool,
    /// Content extends past the bottom edge of the viewport.
    pub can_pan_down: bool,
    /// Scale is below the upper zoom limit.
    pub can_zoom_in: bool,
    /// Scale is above the lower zoom limit.
    pub can_zoom_out: bool,
}

impl Bounds {
    /// Computes bounds for `transform` over a `content` plane seen through `viewport`.
    ///
    /// The pan flags are advisory. They are meant for enabling or disabling
    /// pan affordances; panning past the content is always allowed.
    #[must_use]
    pub fn compute(
        viewport: Size,
        content: Size,
        transform: Transform,
        limits: ZoomLimits,
    ) -> Self {
        let viewport = non_negative(viewport);
        let content = non_negative(content);
        let scaled_content = Size::new(
            content.width * transform.scale,
            content.height * transform.scale,
        );
        let t = transform.translate;
        Self {
            viewport,
            content,
            transform,
            visible_area: visible_area(viewport, content, &transform),
            scaled_content,
            can_pan_left: t.x < 0.0,
            can_pan_right: t.x + scaled_content.width > viewport.width,
            can_pan_up: t.y < 0.0,
            can_pan_down: t.y + scaled_content.height > viewport.height,
            can_zoom_in: limits.can_zoom_in(transform.scale),
            can_zoom_out: limits.can_zoom_out(transform.scale),
        }
    }

    /// Returns `true` if the content point lies inside the visible area.
    ///
    /// The area edges count as visible.
    #[must_use]
    pub fn contains_point(&self, content_pt: Point) -> bool {
        let area = self.visible_area;
        content_pt.x >= area.x0
            && content_pt.x <= area.x1
            && content_pt.y >= area.y0
            && content_pt.y <= area.y1
    }
}
