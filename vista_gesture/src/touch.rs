// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch state: one‑finger pan and two‑finger pinch.
//!
//! ## Usage
//!
//! 1) Call [`TouchState::start`] with the active touch points on touch start.
//! 2) On each (coalesced) move, call [`TouchState::update`] and apply the
//!    returned [`TouchGesture`].
//! 3) Call [`TouchState::end`] with the points that remain on touch end.
//!
//! The pinch baseline (`last_distance`) is reset whenever fewer than two
//! points are active, so going from one finger back to two never produces a
//! zoom ratio against a stale distance.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use vista_gesture::touch::{TouchGesture, TouchState};
//!
//! let mut touch = TouchState::default();
//! touch.start(&[Point::new(100.0, 100.0), Point::new(200.0, 100.0)]);
//!
//! // Fingers spread from 100px to 200px apart.
//! let g = touch.update(&[Point::new(50.0, 100.0), Point::new(250.0, 100.0)]);
//! assert_eq!(g, TouchGesture::Pinch { anchor: Point::new(150.0, 100.0), factor: 2.0 });
//! ```

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

/// Active touch points, inline for the common one‑ and two‑finger cases.
pub type TouchPoints = SmallVec<[Point; 4]>;

/// What a touch move should do to the view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TouchGesture {
    /// Nothing to apply (first frame of a gesture, or an unsupported count).
    None,
    /// Pan by a viewport‑space delta.
    Pan(Vec2),
    /// Zoom by `factor` around `anchor`.
    Pinch {
        /// Midpoint between the two fingers.
        anchor: Point,
        /// Ratio of the current finger distance to the previous one.
        factor: f64,
    },
}

/// Session state for an active touch interaction.
#[derive(Clone, Debug, Default)]
pub struct TouchState {
    /// Touch points seen in the last applied update.
    pub touches: TouchPoints,
    /// Finger distance at the last applied two‑finger update; `0.0` when unset.
    pub last_distance: f64,
    /// Finger midpoint at the last applied two‑finger update.
    pub last_center: Point,
}

impl TouchState {
    /// Records the touch points present at touch start.
    pub fn start(&mut self, touches: &[Point]) {
        self.touches = touches.iter().copied().collect();
        if let [a, b] = touches {
            self.last_distance = a.distance(*b);
            self.last_center = a.midpoint(*b);
        } else {
            self.last_distance = 0.0;
        }
    }

    /// Advances the gesture to `touches` and returns what should be applied.
    pub fn update(&mut self, touches: &[Point]) -> TouchGesture {
        let gesture = match (touches, self.touches.as_slice()) {
            ([now], [before]) => {
                self.last_distance = 0.0;
                TouchGesture::Pan(*now - *before)
            }
            ([a, b], _) => {
                let distance = a.distance(*b);
                let center = a.midpoint(*b);
                let gesture = if self.last_distance > 0.0 {
                    TouchGesture::Pinch {
                        anchor: center,
                        factor: distance / self.last_distance,
                    }
                } else {
                    TouchGesture::None
                };
                self.last_distance = distance;
                self.last_center = center;
                gesture
            }
            _ => {
                self.last_distance = 0.0;
                TouchGesture::None
            }
        };
        self.touches = touches.iter().copied().collect();
        gesture
    }

    /// Records the touch points that remain after a touch end.
    pub fn end(&mut self, remaining: &[Point]) {
        self.touches = remaining.iter().copied().collect();
        if self.touches.len() < 2 {
            self.last_distance = 0.0;
        }
    }

    /// Forgets all touches.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` while at least one touch is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.touches.is_empty()
    }
}
