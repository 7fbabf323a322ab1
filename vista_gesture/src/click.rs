// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click vs drag recognition for a single press.
//!
//! A press is a click when it is released within [`CLICK_MAX_DURATION_MS`]
//! and never strayed more than [`CLICK_MAX_MOVEMENT`] pixels from where it
//! started on either axis. Once a press strays, it stays a drag until
//! release, even if the pointer comes back.

use kurbo::{Point, Vec2};

/// Longest press, in milliseconds, that still counts as a click.
pub const CLICK_MAX_DURATION_MS: u64 = 300;

/// Largest per‑axis movement, in pixels, that still counts as a click.
pub const CLICK_MAX_MOVEMENT: f64 = 5.0;

/// Returns `true` if `offset` is too far for the press to stay a click.
#[must_use]
pub fn exceeds_click_movement(offset: Vec2) -> bool {
    offset.x.abs() > CLICK_MAX_MOVEMENT || offset.y.abs() > CLICK_MAX_MOVEMENT
}

/// Result of releasing a press.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClickResult {
    /// Short and still: a click at the press position.
    Click(Point),
    /// The press moved past the movement threshold.
    Drag,
    /// Still, but held too long.
    LongPress,
    /// There was no press to release.
    None,
}

/// Press tracking for click recognition.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClickState {
    down: Option<(Point, u64)>,
    has_dragged: bool,
}

impl ClickState {
    /// Creates an idle click state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a press at `pos`.
    pub fn on_down(&mut self, pos: Point, time_ms: u64) {
        self.down = Some((pos, time_ms));
        self.has_dragged = false;
    }

    /// Feeds a pointer move; returns `true` once the press has become a drag.
    pub fn on_move(&mut self, pos: Point) -> bool {
        if let Some((start, _)) = self.down
            && exceeds_click_movement(pos - start)
        {
            self.has_dragged = true;
        }
        self.has_dragged
    }

    /// Releases the press and classifies it.
    pub fn on_up(&mut self, time_ms: u64) -> ClickResult {
        let Some((pos, down_ms)) = self.down.take() else {
            return ClickResult::None;
        };
        let has_dragged = core::mem::take(&mut self.has_dragged);
        if has_dragged {
            ClickResult::Drag
        } else if time_ms.saturating_sub(down_ms) < CLICK_MAX_DURATION_MS {
            ClickResult::Click(pos)
        } else {
            ClickResult::LongPress
        }
    }

    /// Returns `true` while a press is held.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.down.is_some()
    }

    /// Returns `true` if the held press has moved past the threshold.
    #[must_use]
    pub fn has_dragged(&self) -> bool {
        self.has_dragged
    }

    /// Drops any held press.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
