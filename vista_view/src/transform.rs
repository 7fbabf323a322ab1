// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};

/// Uniform scale + translate mapping content coordinates into the viewport.
///
/// The map is `content * scale + translate = viewport`. There is no rotation
/// and no per-axis scale.
///
/// A `Transform` does not know about zoom limits; keeping `scale` inside
/// [`ZoomLimits`](crate::ZoomLimits) is the job of whoever mutates it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Transform {
    /// Uniform zoom factor.
    pub scale: f64,
    /// Viewport‑space offset of the content origin.
    pub translate: Vec2,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// Scale `1.0`, no translation.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translate: Vec2::ZERO,
    };

    /// Creates a transform from a scale and a translation.
    #[must_use]
    pub const fn new(scale: f64, translate: Vec2) -> Self {
        Self { scale, translate }
    }

    /// Returns `true` if the transform can be inverted.
    #[must_use]
    pub fn is_invertible(&self) -> bool {
        self.scale.is_finite() && self.scale != 0.0
    }

    /// Maps a viewport point into content coordinates.
    ///
    /// A non‑invertible transform maps every point to itself.
    #[must_use]
    pub fn to_content(&self, viewport_pt: Point) -> Point {
        if !self.is_invertible() {
            return viewport_pt;
        }
        ((viewport_pt.to_vec2() - self.translate) / self.scale).to_point()
    }

    /// Maps a content point into viewport coordinates.
    #[must_use]
    pub fn to_viewport(&self, content_pt: Point) -> Point {
        (content_pt.to_vec2() * self.scale + self.translate).to_point()
    }

    /// Returns a copy translated by `delta` viewport pixels.
    #[must_use]
    pub fn panned(self, delta: Vec2) -> Self {
        Self {
            scale: self.scale,
            translate: self.translate + delta,
        }
    }

    /// Returns a copy with the translation replaced.
    #[must_use]
    pub fn with_translate(self, translate: Vec2) -> Self {
        Self {
            scale: self.scale,
            translate,
        }
    }

    /// The equivalent Kurbo affine, for surfaces that render with one.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.translate) * Affine::scale(self.scale)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::Transform;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn content_viewport_roundtrip() {
        let transforms = [
            Transform::IDENTITY,
            Transform::new(2.0, Vec2::new(-400.0, -300.0)),
            Transform::new(0.05, Vec2::new(12.5, -7.25)),
            Transform::new(80.0, Vec2::new(-1.0e5, 3.0e4)),
        ];
        let points = [
            Point::ZERO,
            Point::new(400.0, 300.0),
            Point::new(-17.3, 1234.5),
        ];
        for t in transforms {
            for p in points {
                let back = t.to_content(t.to_viewport(p));
                assert!(close(back, p), "{t:?} failed to round-trip {p:?}: {back:?}");
            }
        }
    }

    #[test]
    fn forward_map_applies_scale_then_translate() {
        let t = Transform::new(2.0, Vec2::new(10.0, -5.0));
        assert_eq!(t.to_viewport(Point::new(3.0, 4.0)), Point::new(16.0, 3.0));
    }

    #[test]
    fn degenerate_scale_is_identity_fallback() {
        let p = Point::new(12.0, 34.0);
        let zero = Transform::new(0.0, Vec2::new(5.0, 5.0));
        assert_eq!(zero.to_content(p), p);

        let nan = Transform::new(f64::NAN, Vec2::ZERO);
        assert_eq!(nan.to_content(p), p);
    }

    #[test]
    fn affine_matches_point_mapping() {
        let t = Transform::new(1.5, Vec2::new(-20.0, 8.0));
        let p = Point::new(7.0, -3.0);
        assert!(close(t.to_affine() * p, t.to_viewport(p)));
    }
}
