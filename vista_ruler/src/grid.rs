// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

/// Grid cell sizing bounds, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct GridSettings {
    /// Cell size at scale `1.0`, in content units.
    pub base_size: f64,
    /// Cells smaller than this on screen are doubled.
    pub min_size: f64,
    /// Cells larger than this on screen are halved.
    pub max_size: f64,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            base_size: 100.0,
            min_size: 20.0,
            max_size: 200.0,
        }
    }
}

/// On‑screen grid geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GridMetrics {
    /// Cell edge length in pixels.
    pub cell_size: f64,
    /// Phase of the grid: `translate` reduced modulo `cell_size`.
    pub offset: Vec2,
}

impl GridMetrics {
    /// Sizes the grid for a view at `scale` shifted by `translate`.
    ///
    /// The on‑screen cell starts at `base_size * scale` and is doubled or
    /// halved until it lands in `[min_size, max_size]`, so the grid never gets
    /// too dense or too sparse as the view zooms. A degenerate scale (zero,
    /// negative, non‑finite) uses `base_size` clamped into range.
    ///
    /// ```
    /// use kurbo::Vec2;
    /// use vista_ruler::{GridMetrics, GridSettings};
    ///
    /// let g = GridMetrics::compute(0.1, Vec2::new(25.0, -5.0), GridSettings::default());
    /// // 100 * 0.1 = 10 px is too small; doubled to 20.
    /// assert_eq!(g.cell_size, 20.0);
    /// assert_eq!(g.offset, Vec2::new(5.0, -5.0));
    /// ```
    #[must_use]
    pub fn compute(scale: f64, translate: Vec2, settings: GridSettings) -> Self {
        let GridSettings {
            base_size,
            min_size,
            max_size,
        } = settings;
        let fallback = base_size.clamp(min_size.min(max_size), max_size.max(min_size));
        let mut size = base_size * scale;
        if !(size.is_finite() && size > 0.0) || !(min_size > 0.0 && max_size >= min_size * 2.0) {
            size = fallback;
        } else {
            while size < min_size {
                size *= 2.0;
            }
            while size > max_size {
                size /= 2.0;
            }
        }
        let phase = |t: f64| if t.is_finite() { t % size } else { 0.0 };
        Self {
            cell_size: size,
            offset: Vec2::new(phase(translate.x), phase(translate.y)),
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::{GridMetrics, GridSettings};

    #[test]
    fn cell_stays_in_range_across_zoom() {
        let settings = GridSettings::default();
        let mut scale = 0.001;
        while scale < 1000.0 {
            let g = GridMetrics::compute(scale, Vec2::ZERO, settings);
            assert!(
                (20.0..=200.0).contains(&g.cell_size),
                "scale {scale} gave {}",
                g.cell_size
            );
            scale *= 1.37;
        }
    }

    #[test]
    fn base_size_follows_scale_inside_range() {
        let g = GridMetrics::compute(1.5, Vec2::ZERO, GridSettings::default());
        assert_eq!(g.cell_size, 150.0);
        let g = GridMetrics::compute(3.0, Vec2::ZERO, GridSettings::default());
        assert_eq!(g.cell_size, 150.0);
    }

    #[test]
    fn offset_keeps_sign_of_translate() {
        let g = GridMetrics::compute(1.0, Vec2::new(-250.0, 130.0), GridSettings::default());
        assert_eq!(g.cell_size, 100.0);
        assert_eq!(g.offset, Vec2::new(-50.0, 30.0));
    }

    #[test]
    fn degenerate_scale_uses_base() {
        for s in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            let g = GridMetrics::compute(s, Vec2::new(f64::NAN, 10.0), GridSettings::default());
            assert_eq!(g.cell_size, 100.0);
            assert_eq!(g.offset, Vec2::new(0.0, 10.0));
        }
    }
}
