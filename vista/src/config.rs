// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport configuration.

use alloc::string::String;
use core::fmt;
use core::time::Duration;

use kurbo::{Size, Vec2};
use vista_view::ZoomLimits;

/// Behavior knobs for a [`Viewport`](crate::Viewport).
///
/// All lengths are in pixels, all durations in seconds. Use
/// [`ViewportConfig::validate`] (or [`Viewport::new`](crate::Viewport::new),
/// which calls it) before relying on a hand‑built config.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct ViewportConfig {
    /// Width of the content plane.
    pub content_width: f64,
    /// Height of the content plane.
    pub content_height: f64,

    /// Smallest allowed scale.
    pub min_zoom: f64,
    /// Largest allowed scale.
    pub max_zoom: f64,
    /// Wheel zoom step: each notch scales by `1 + zoom_speed`.
    pub zoom_speed: f64,
    /// Scale zoom speeds by the canvas size relative to a 1920×1080 display.
    pub enable_adaptive_speed: bool,

    /// Accept wheel and pinch zoom.
    pub enable_zoom: bool,
    /// Accept drag, touch and trackpad panning.
    pub enable_pan: bool,
    /// Accept touch input.
    pub enable_touch: bool,
    /// Accept keyboard navigation.
    pub enable_keyboard: bool,
    /// Drag with the primary button.
    pub enable_left_drag: bool,
    /// Drag with the middle button.
    pub enable_middle_drag: bool,
    /// Only start mouse drags while the space bar is held.
    pub require_space_for_mouse_drag: bool,

    /// Arrow key pan distance.
    pub keyboard_pan_step: f64,
    /// Multiplier for arrow key pans with Shift held.
    pub keyboard_fast_multiplier: f64,
    /// Keyboard zoom step, before adaptive scaling.
    pub keyboard_zoom_step: f64,

    /// Zoom to a point when it is clicked.
    pub enable_click_to_zoom: bool,
    /// Scale that click‑to‑zoom sets.
    pub click_zoom_level: f64,
    /// Click‑to‑zoom only with Alt/Option held.
    pub require_option_for_click_zoom: bool,

    /// Animate discrete operations.
    pub enable_transition: bool,
    /// Animation length for discrete operations, in seconds.
    pub transition_duration: f64,

    /// Show rulers initially.
    pub enable_rulers: bool,
    /// Show the grid initially.
    pub enable_grid: bool,
    /// Thickness of the ruler band along the top and left edges.
    pub ruler_size: f64,

    /// Starting scale; `1.0` when unset.
    pub initial_zoom: Option<f64>,
    /// Starting translation; zero when unset.
    pub initial_pan: Option<Vec2>,
    /// Name the instance is registered under.
    pub name: Option<String>,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            content_width: 8000.0,
            content_height: 8000.0,
            min_zoom: 0.05,
            max_zoom: 80.0,
            zoom_speed: 1.5,
            enable_adaptive_speed: true,
            enable_zoom: true,
            enable_pan: true,
            enable_touch: true,
            enable_keyboard: true,
            enable_left_drag: true,
            enable_middle_drag: true,
            require_space_for_mouse_drag: false,
            keyboard_pan_step: 50.0,
            keyboard_fast_multiplier: 20.0,
            keyboard_zoom_step: 0.2,
            enable_click_to_zoom: true,
            click_zoom_level: 1.0,
            require_option_for_click_zoom: false,
            enable_transition: true,
            transition_duration: 0.2,
            enable_rulers: true,
            enable_grid: false,
            ruler_size: 20.0,
            initial_zoom: None,
            initial_pan: None,
            name: None,
        }
    }
}

fn positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

impl ViewportConfig {
    /// Checks that every numeric field is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(positive(self.content_width) && positive(self.content_height)) {
            return Err(ConfigError::ContentSize {
                width: self.content_width,
                height: self.content_height,
            });
        }
        if !(positive(self.min_zoom) && positive(self.max_zoom) && self.max_zoom > self.min_zoom) {
            return Err(ConfigError::ZoomRange {
                min: self.min_zoom,
                max: self.max_zoom,
            });
        }
        if !positive(self.zoom_speed) {
            return Err(ConfigError::ZoomSpeed(self.zoom_speed));
        }
        if !positive(self.keyboard_pan_step) {
            return Err(ConfigError::PanStep(self.keyboard_pan_step));
        }
        if !positive(self.keyboard_fast_multiplier) {
            return Err(ConfigError::FastMultiplier(self.keyboard_fast_multiplier));
        }
        if !positive(self.keyboard_zoom_step) {
            return Err(ConfigError::KeyboardZoomStep(self.keyboard_zoom_step));
        }
        if !positive(self.click_zoom_level) {
            return Err(ConfigError::ClickZoomLevel(self.click_zoom_level));
        }
        if !(self.transition_duration.is_finite() && self.transition_duration >= 0.0) {
            return Err(ConfigError::TransitionDuration(self.transition_duration));
        }
        if !(self.ruler_size.is_finite() && self.ruler_size >= 0.0) {
            return Err(ConfigError::RulerSize(self.ruler_size));
        }
        if let Some(zoom) = self.initial_zoom
            && !positive(zoom)
        {
            return Err(ConfigError::InitialZoom(zoom));
        }
        if let Some(pan) = self.initial_pan
            && !(pan.x.is_finite() && pan.y.is_finite())
        {
            return Err(ConfigError::InitialPan { x: pan.x, y: pan.y });
        }
        Ok(())
    }

    /// Zoom range as [`ZoomLimits`].
    #[must_use]
    pub fn limits(&self) -> ZoomLimits {
        ZoomLimits::new(self.min_zoom, self.max_zoom)
    }

    /// Content plane size.
    #[must_use]
    pub fn content_size(&self) -> Size {
        Size::new(self.content_width, self.content_height)
    }

    /// Transition length; zero if the configured value is unusable.
    #[must_use]
    pub fn transition(&self) -> Duration {
        Duration::try_from_secs_f64(self.transition_duration).unwrap_or(Duration::ZERO)
    }
}

/// A [`ViewportConfig`] field holds an unusable value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// Content width or height is not positive.
    ContentSize {
        /// Configured width.
        width: f64,
        /// Configured height.
        height: f64,
    },
    /// Zoom bounds are not positive, or `max_zoom <= min_zoom`.
    ZoomRange {
        /// Configured minimum.
        min: f64,
        /// Configured maximum.
        max: f64,
    },
    /// Zoom speed is not positive.
    ZoomSpeed(f64),
    /// Keyboard pan step is not positive.
    PanStep(f64),
    /// Fast pan multiplier is not positive.
    FastMultiplier(f64),
    /// Keyboard zoom step is not positive.
    KeyboardZoomStep(f64),
    /// Click zoom level is not positive.
    ClickZoomLevel(f64),
    /// Transition duration is negative.
    TransitionDuration(f64),
    /// Ruler size is negative.
    RulerSize(f64),
    /// Initial zoom is not positive.
    InitialZoom(f64),
    /// Initial pan has a non‑finite component.
    InitialPan {
        /// Configured x offset.
        x: f64,
        /// Configured y offset.
        y: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ContentSize { width, height } => {
                write!(f, "content size {width}x{height} must be positive")
            }
            Self::ZoomRange { min, max } => write!(
                f,
                "zoom range {min}..{max} must be positive with max greater than min"
            ),
            Self::ZoomSpeed(v) => write!(f, "zoom speed {v} must be positive"),
            Self::PanStep(v) => write!(f, "keyboard pan step {v} must be positive"),
            Self::FastMultiplier(v) => write!(f, "keyboard fast multiplier {v} must be positive"),
            Self::KeyboardZoomStep(v) => write!(f, "keyboard zoom step {v} must be positive"),
            Self::ClickZoomLevel(v) => write!(f, "click zoom level {v} must be positive"),
            Self::TransitionDuration(v) => {
                write!(f, "transition duration {v} must not be negative")
            }
            Self::RulerSize(v) => write!(f, "ruler size {v} must not be negative"),
            Self::InitialZoom(v) => write!(f, "initial zoom {v} must be positive"),
            Self::InitialPan { x, y } => write!(f, "initial pan ({x}, {y}) must be finite"),
        }
    }
}

impl core::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use core::time::Duration;

    use kurbo::Vec2;

    use super::{ConfigError, ViewportConfig};

    #[test]
    fn defaults_are_valid() {
        let c = ViewportConfig::default();
        assert_eq!(c.validate(), Ok(()));
        assert_eq!(c.limits().min, 0.05);
        assert_eq!(c.limits().max, 80.0);
        assert_eq!(c.transition(), Duration::from_millis(200));
    }

    #[test]
    fn rejects_inverted_zoom_range() {
        let c = ViewportConfig {
            min_zoom: 2.0,
            max_zoom: 2.0,
            ..ViewportConfig::default()
        };
        assert_eq!(
            c.validate(),
            Err(ConfigError::ZoomRange { min: 2.0, max: 2.0 })
        );
    }

    #[test]
    fn rejects_non_positive_steps() {
        let c = ViewportConfig {
            zoom_speed: 0.0,
            ..ViewportConfig::default()
        };
        assert_eq!(c.validate(), Err(ConfigError::ZoomSpeed(0.0)));

        let c = ViewportConfig {
            keyboard_pan_step: -1.0,
            ..ViewportConfig::default()
        };
        assert_eq!(c.validate(), Err(ConfigError::PanStep(-1.0)));

        let c = ViewportConfig {
            click_zoom_level: f64::NAN,
            ..ViewportConfig::default()
        };
        assert!(matches!(c.validate(), Err(ConfigError::ClickZoomLevel(_))));
    }

    #[test]
    fn rejects_empty_content() {
        let c = ViewportConfig {
            content_width: 0.0,
            ..ViewportConfig::default()
        };
        let err = c.validate().unwrap_err();
        assert_eq!(err.to_string(), "content size 0x8000 must be positive");
    }

    #[test]
    fn zero_transition_is_allowed() {
        let c = ViewportConfig {
            transition_duration: 0.0,
            ..ViewportConfig::default()
        };
        assert_eq!(c.validate(), Ok(()));
        assert_eq!(c.transition(), Duration::ZERO);
    }

    #[test]
    fn rejects_non_finite_initial_pan() {
        let c = ViewportConfig {
            initial_pan: Some(Vec2::new(f64::INFINITY, 0.0)),
            ..ViewportConfig::default()
        };
        let err = c.validate().unwrap_err();
        assert_eq!(err, ConfigError::InitialPan { x: f64::INFINITY, y: 0.0 });
        assert_eq!(err.to_string(), "initial pan (inf, 0) must be finite");

        let c = ViewportConfig {
            initial_pan: Some(Vec2::new(-250.0, 40.0)),
            ..ViewportConfig::default()
        };
        assert_eq!(c.validate(), Ok(()));
    }
}
