// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host display surface.

use core::time::Duration;

use kurbo::Size;
use vista_view::Transform;

/// Identifies a timer the viewport asked the host to run.
///
/// When the timer expires the host passes the id back to
/// [`Viewport::on_timer`](crate::Viewport::on_timer). Ids are never reused
/// by one viewport, so a late or duplicate expiry is simply ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub(crate) u64);

impl TimerId {
    /// Raw id, for hosts that key timers by integer.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Pointer cursor the surface should show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CursorHint {
    /// Regular pointer; dragging is unavailable.
    #[default]
    Default,
    /// Dragging is available.
    Grab,
    /// A drag is in progress.
    Grabbing,
}

/// What the viewport needs from the thing that actually displays content.
///
/// The transform maps content coordinates into *canvas* coordinates: the
/// viewport area to the right of and below the ruler band while rulers are
/// shown, or the whole viewport otherwise. The surface is expected to
/// offset its content layer by the ruler band itself.
///
/// Only [`viewport_size`](Self::viewport_size) and
/// [`apply_transform`](Self::apply_transform) are required. The scheduling
/// hooks default to "unavailable", in which case the viewport applies
/// every update synchronously and skips transitions.
pub trait Surface {
    /// Current size of the whole viewport, rulers included.
    fn viewport_size(&self) -> Size;

    /// Displays content under `transform`.
    fn apply_transform(&mut self, transform: &Transform);

    /// Enables (`Some`) or disables (`None`) animating subsequent transform
    /// changes over the given duration.
    fn set_transition(&mut self, duration: Option<Duration>) {
        let _ = duration;
    }

    /// Asks for [`Viewport::on_frame`](crate::Viewport::on_frame) to be
    /// called at the next animation frame.
    ///
    /// Returns `false` if the host has no frame clock.
    fn request_frame(&mut self) -> bool {
        false
    }

    /// Asks for [`Viewport::on_timer`](crate::Viewport::on_timer) to be
    /// called with `id` after `delay`.
    ///
    /// Returns `false` if the host has no timers.
    fn schedule_timer(&mut self, id: TimerId, delay: Duration) -> bool {
        let _ = (id, delay);
        false
    }

    /// Cancels a timer scheduled earlier. Expiry of a cancelled timer is
    /// harmless, so hosts may ignore this.
    fn cancel_timer(&mut self, id: TimerId) {
        let _ = id;
    }

    /// Shows or hides the ruler band.
    fn set_rulers_visible(&mut self, visible: bool) {
        let _ = visible;
    }

    /// Shows or hides the grid overlay.
    fn set_grid_visible(&mut self, visible: bool) {
        let _ = visible;
    }

    /// Updates the pointer cursor.
    fn set_cursor(&mut self, cursor: CursorHint) {
        let _ = cursor;
    }
}
