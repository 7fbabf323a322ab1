// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Rect, Size, Vec2};
use vista_view::Transform;

use crate::grid::{GridMetrics, GridSettings};
use crate::ticks::{AxisSpan, Tick, TickOptions, ticks};

/// Options for [`RulerLayout::compute`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct RulerOptions {
    /// Tick placement.
    pub ticks: TickOptions,
    /// Grid sizing.
    pub grid: GridSettings,
}

/// Ticks for both rulers, and the grid, for one view.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RulerLayout {
    /// Content rectangle covered by the canvas.
    pub visible: Rect,
    /// Horizontal tick spacing in content units.
    pub horizontal_spacing: f64,
    /// Vertical tick spacing in content units.
    pub vertical_spacing: f64,
    /// Ticks along the top ruler, pixels measured from the canvas left edge.
    pub horizontal: Vec<Tick>,
    /// Ticks along the side ruler, pixels measured from the canvas top edge.
    pub vertical: Vec<Tick>,
    /// Grid geometry, when the grid is shown.
    pub grid: Option<GridMetrics>,
}

impl RulerLayout {
    /// Lays out rulers for `transform` over a canvas of `canvas` pixels.
    ///
    /// The canvas is the area next to the rulers, not including them. A
    /// non‑invertible transform is laid out as if the scale were `1.0`.
    #[must_use]
    pub fn compute(
        transform: &Transform,
        canvas: Size,
        options: &RulerOptions,
        show_grid: bool,
    ) -> Self {
        let scale = if transform.is_invertible() {
            transform.scale
        } else {
            1.0
        };
        let t = transform.translate;
        let (tx, ty) = (
            if t.x.is_finite() { t.x } else { 0.0 },
            if t.y.is_finite() { t.y } else { 0.0 },
        );
        let width = canvas.width.max(0.0);
        let height = canvas.height.max(0.0);

        let h_span = AxisSpan::from_scale(-tx / scale, width, scale);
        let v_span = AxisSpan::from_scale(-ty / scale, height, scale);
        let h_ticks = ticks(h_span, options.ticks);
        let v_ticks = ticks(v_span, options.ticks);

        Self {
            visible: Rect::new(h_span.start, v_span.start, h_span.end, v_span.end),
            horizontal_spacing: h_ticks.spacing(),
            vertical_spacing: v_ticks.spacing(),
            horizontal: h_ticks.collect(),
            vertical: v_ticks.collect(),
            grid: show_grid.then(|| {
                GridMetrics::compute(scale, Vec2::new(tx, ty), options.grid)
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Size, Vec2};
    use vista_view::Transform;

    use super::{RulerLayout, RulerOptions};

    #[test]
    fn identity_layout() {
        let layout = RulerLayout::compute(
            &Transform::IDENTITY,
            Size::new(1000.0, 500.0),
            &RulerOptions::default(),
            false,
        );
        assert_eq!(layout.horizontal_spacing, 50.0);
        assert_eq!(layout.vertical_spacing, 50.0);
        assert_eq!(layout.horizontal.first().map(|t| t.position), Some(0.0));
        assert_eq!(layout.horizontal.len(), 21);
        assert!(layout.grid.is_none());
    }

    #[test]
    fn panned_and_zoomed_layout_tracks_content() {
        // Scale 2, content x = 100 at the canvas left edge.
        let t = Transform::new(2.0, Vec2::new(-200.0, 0.0));
        let layout =
            RulerLayout::compute(&t, Size::new(800.0, 600.0), &RulerOptions::default(), true);
        assert_eq!(layout.visible.x0, 100.0);
        assert_eq!(layout.visible.x1, 500.0);
        for tick in &layout.horizontal {
            assert!((tick.pixel - (tick.position - 100.0) * 2.0).abs() < 1e-9);
        }
        let grid = layout.grid.unwrap();
        assert_eq!(grid.cell_size, 200.0);
        assert_eq!(grid.offset, Vec2::new(-0.0, 0.0));
    }

    #[test]
    fn degenerate_transform_falls_back_to_unit_scale() {
        let t = Transform::new(0.0, Vec2::new(f64::NAN, 10.0));
        let layout =
            RulerLayout::compute(&t, Size::new(400.0, 400.0), &RulerOptions::default(), true);
        assert_eq!(layout.visible.x0, 0.0);
        assert_eq!(layout.visible.y0, -10.0);
        assert!(!layout.horizontal.is_empty());
        assert_eq!(layout.grid.unwrap().cell_size, 100.0);
    }

    #[test]
    fn empty_canvas_has_no_ticks() {
        let layout = RulerLayout::compute(
            &Transform::IDENTITY,
            Size::ZERO,
            &RulerOptions::default(),
            false,
        );
        assert!(layout.horizontal.is_empty());
        assert!(layout.vertical.is_empty());
    }

    #[test]
    fn far_translate_lays_out_bounded_ticks() {
        let t = Transform::new(1.0, Vec2::new(-1e18, 1e18));
        let layout =
            RulerLayout::compute(&t, Size::new(800.0, 600.0), &RulerOptions::default(), false);
        assert!(layout.horizontal.len() <= 30);
        assert!(layout.vertical.len() <= 30);
    }
}
