// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel classification: mouse wheel vs trackpad scroll vs trackpad pinch.
//!
//! Wheel events do not say which device produced them, so the kind is
//! guessed from the shape of a single event's deltas. Each of four hints
//! votes for "trackpad":
//!
//! - deltas reported in pixels,
//! - a small vertical delta (`|dy| < 50`),
//! - a fractional vertical delta,
//! - movement on both axes at once.
//!
//! Two or more votes classify the event as a trackpad. A held Ctrl/Meta turns
//! a trackpad scroll into a pinch (that is how browsers report pinches).
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use vista_gesture::{DeltaMode, Modifiers, WheelInput, wheel::{WheelAction, classify}};
//!
//! let notch = WheelInput {
//!     position: Point::new(100.0, 100.0),
//!     delta: Vec2::new(0.0, 120.0),
//!     delta_mode: DeltaMode::Pixel,
//!     modifiers: Modifiers::empty(),
//! };
//! let info = classify(&notch);
//! assert!(info.is_mouse_wheel);
//! assert!(matches!(info.action(), WheelAction::Zoom { pinch: false }));
//! ```

use crate::input::{DeltaMode, WheelInput};

/// Vertical deltas below this magnitude hint at a trackpad.
pub const SMALL_DELTA: f64 = 50.0;

/// Number of trackpad hints needed to classify an event as trackpad input.
pub const TRACKPAD_MIN_CRITERIA: usize = 2;

/// Pinch speed relative to the wheel zoom speed.
///
/// Pinches arrive as many small events, each with a much larger delta than
/// a wheel notch is worth.
pub const TRACKPAD_PINCH_SPEED_FACTOR: f64 = 0.01;

/// Per‑event device classification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GestureInfo {
    /// Enough trackpad hints were present.
    pub is_trackpad: bool,
    /// Not a trackpad.
    pub is_mouse_wheel: bool,
    /// Trackpad two‑finger scroll (no zoom modifier).
    pub is_trackpad_scroll: bool,
    /// Trackpad pinch (zoom modifier held).
    pub is_trackpad_pinch: bool,
    /// The event should zoom. Mouse wheels always zoom.
    pub is_zoom_gesture: bool,
}

/// What a classified wheel event should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelAction {
    /// Pan 1:1 by the event's pixel deltas.
    Pan,
    /// Zoom around the pointer.
    Zoom {
        /// Use the reduced pinch speed.
        pinch: bool,
    },
}

impl GestureInfo {
    /// Routes the event to the pan or zoom path.
    #[must_use]
    pub fn action(&self) -> WheelAction {
        if self.is_trackpad_scroll {
            WheelAction::Pan
        } else {
            WheelAction::Zoom {
                pinch: self.is_trackpad_pinch,
            }
        }
    }
}

/// Counts how many trackpad hints the event shows.
#[must_use]
pub fn trackpad_score(event: &WheelInput) -> usize {
    let dy = event.delta.y;
    let dx = event.delta.x;
    [
        event.delta_mode == DeltaMode::Pixel,
        dy.abs() < SMALL_DELTA,
        dy % 1.0 != 0.0,
        dx.abs() > 0.0 && dy.abs() > 0.0,
    ]
    .into_iter()
    .filter(|hit| *hit)
    .count()
}

/// Classifies a wheel event.
#[must_use]
pub fn classify(event: &WheelInput) -> GestureInfo {
    let zoom_intent = event.modifiers.zoom_intent();
    let is_trackpad = trackpad_score(event) >= TRACKPAD_MIN_CRITERIA;
    let is_trackpad_scroll = is_trackpad && !zoom_intent;
    GestureInfo {
        is_trackpad,
        is_mouse_wheel: !is_trackpad,
        is_trackpad_scroll,
        is_trackpad_pinch: is_trackpad && zoom_intent,
        is_zoom_gesture: !is_trackpad_scroll,
    }
}

/// Zoom multiplier for one wheel event at the given speed.
///
/// Scrolling up (`dy < 0`) zooms in by `1 + speed`; anything else zooms out
/// by the reciprocal so that in/out pairs cancel exactly.
#[must_use]
pub fn zoom_multiplier(delta_y: f64, speed: f64) -> f64 {
    if delta_y < 0.0 {
        1.0 + speed
    } else {
        1.0 / (1.0 + speed)
    }
}
