// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state helper: compute movement deltas and total offsets from position changes.
//!
//! ## Usage
//!
//! 1) Start a drag operation by calling [`DragState::start`] with the initial position and button.
//! 2) On each move event, call [`DragState::update`] to get the movement delta since the last update.
//! 3) Optionally call [`DragState::total_offset`] to get the cumulative offset from the start position.
//! 4) End the drag operation with [`DragState::end`] to reset state.
//!
//! When moves are coalesced per frame, only the last position of a frame is
//! passed to `update`; the delta it returns still covers every skipped event.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use vista_gesture::{PointerButton, drag::DragState};
//!
//! let mut drag = DragState::default();
//!
//! // Start dragging at (10, 20) with the primary button.
//! drag.start(Point::new(10.0, 20.0), PointerButton::Primary);
//! assert!(drag.is_dragging());
//!
//! // Move to (15, 25) - delta is (5, 5)
//! let delta = drag.update(Point::new(15.0, 25.0)).unwrap();
//! assert_eq!(delta.x, 5.0);
//! assert_eq!(delta.y, 5.0);
//! ```

use kurbo::{Point, Vec2};

use crate::input::PointerButton;

/// Tracks drag state for move event processing
#[derive(Debug, Clone, Default, Copy)]
pub struct DragState {
    /// Start position of the drag operation
    pub start_pos: Option<Point>,
    /// Last position that produced a delta
    pub last_pos: Option<Point>,
    /// Button that started the drag
    pub button: Option<PointerButton>,
}

impl DragState {
    /// Start tracking a new drag operation from the given position.
    pub fn start(&mut self, pos: Point, button: PointerButton) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        self.button = Some(button);
    }

    /// Update the drag state with a new position, returning the movement delta since last update.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        self.start_pos?;
        let delta = self.last_pos.map(|last| pos - last);
        self.last_pos = Some(pos);
        delta
    }

    /// Get total offset from drag start position.
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start_pos| current_pos - start_pos)
    }

    /// End the current drag operation and reset state.
    pub fn end(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` while a drag operation is active
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }

    /// Returns `true` if `button` is the one that started the active drag.
    pub fn is_drag_button(&self, button: PointerButton) -> bool {
        self.button == Some(button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_drag_state_is_not_dragging() {
        let drag = DragState::default();
        assert!(!drag.is_dragging());
        assert!(drag.button.is_none());
    }

    #[test]
    fn update_returns_none_when_not_dragging() {
        let mut drag = DragState::default();

        let delta = drag.update(Point::new(15.0, 25.0));

        assert_eq!(delta, None);
        assert!(drag.last_pos.is_none());
    }

    #[test]
    fn multiple_updates_track_incremental_deltas() {
        let mut drag = DragState::default();
        drag.start(Point::new(0.0, 0.0), PointerButton::Primary);

        assert_eq!(drag.update(Point::new(5.0, 3.0)), Some(Vec2::new(5.0, 3.0)));
        assert_eq!(drag.update(Point::new(8.0, 7.0)), Some(Vec2::new(3.0, 4.0)));
        assert_eq!(
            drag.update(Point::new(6.0, 7.0)),
            Some(Vec2::new(-2.0, 0.0))
        );
    }

    #[test]
    fn skipped_positions_are_folded_into_next_delta() {
        let mut drag = DragState::default();
        drag.start(Point::new(0.0, 0.0), PointerButton::Auxiliary);

        // Positions (1, 1) and (2, 2) were coalesced away; only (3, 3) arrives.
        assert_eq!(drag.update(Point::new(3.0, 3.0)), Some(Vec2::new(3.0, 3.0)));
        assert_eq!(drag.total_offset(Point::new(3.0, 3.0)), Some(Vec2::new(3.0, 3.0)));
    }

    #[test]
    fn end_resets_drag_state() {
        let mut drag = DragState::default();
        drag.start(Point::new(10.0, 20.0), PointerButton::Auxiliary);
        assert!(drag.is_drag_button(PointerButton::Auxiliary));
        assert!(!drag.is_drag_button(PointerButton::Primary));

        drag.end();

        assert!(drag.start_pos.is_none());
        assert!(drag.last_pos.is_none());
        assert!(drag.button.is_none());
    }
}
