// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Inclusive range of permitted zoom factors.
///
/// Both ends are expected to be positive with `min <= max`; validating that
/// is up to whoever builds the configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomLimits {
    /// Smallest permitted scale.
    pub min: f64,
    /// Largest permitted scale.
    pub max: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min: 0.05,
            max: 80.0,
        }
    }
}

impl ZoomLimits {
    /// Creates limits from a minimum and maximum scale.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clamps `scale` into `[min, max]`.
    ///
    /// Written as `max(min, min(max, scale))` so that inverted limits never
    /// panic.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        self.min.max(self.max.min(scale))
    }

    /// Returns `true` if `scale` can still grow.
    #[must_use]
    pub fn can_zoom_in(&self, scale: f64) -> bool {
        scale < self.max
    }

    /// Returns `true` if `scale` can still shrink.
    #[must_use]
    pub fn can_zoom_out(&self, scale: f64) -> bool {
        scale > self.min
    }
}

#[cfg(test)]
mod tests {
    use super::ZoomLimits;

    #[test]
    fn clamp_bounds_both_ends() {
        let limits = ZoomLimits::new(0.05, 80.0);
        assert_eq!(limits.clamp(1000.0), 80.0);
        assert_eq!(limits.clamp(0.0), 0.05);
        assert_eq!(limits.clamp(-3.0), 0.05);
        assert_eq!(limits.clamp(2.5), 2.5);
    }

    #[test]
    fn clamp_is_idempotent() {
        let limits = ZoomLimits::new(0.1, 10.0);
        for s in [-1.0, 0.0, 0.05, 0.1, 1.0, 9.99, 10.0, 1e9] {
            let once = limits.clamp(s);
            assert_eq!(limits.clamp(once), once, "clamp not idempotent for {s}");
        }
    }

    #[test]
    fn zoom_direction_queries() {
        let limits = ZoomLimits::default();
        assert!(limits.can_zoom_in(1.0));
        assert!(limits.can_zoom_out(1.0));
        assert!(!limits.can_zoom_in(80.0));
        assert!(!limits.can_zoom_out(0.05));
    }
}
