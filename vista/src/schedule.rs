// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Update scheduling: per‑frame coalescing and debounced transition timers.
//!
//! Both primitives only keep bookkeeping; the host's frame clock and timers
//! drive them through [`Viewport::on_frame`](crate::Viewport::on_frame) and
//! [`Viewport::on_timer`](crate::Viewport::on_timer).

use crate::surface::TimerId;

/// Outcome of [`FrameCoalescer::offer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Offer {
    /// First value since the last frame: a frame must be requested.
    RequestFrame,
    /// A frame is already requested; the new value replaced the pending one.
    Coalesced,
}

/// Holds at most one pending update until the next frame.
///
/// Within a frame the latest offered value wins.
#[derive(Clone, Debug)]
pub struct FrameCoalescer<T> {
    pending: Option<T>,
    requested: bool,
}

impl<T> Default for FrameCoalescer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FrameCoalescer<T> {
    /// Creates an empty coalescer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: None,
            requested: false,
        }
    }

    /// Stores `value` for the next frame.
    pub fn offer(&mut self, value: T) -> Offer {
        self.pending = Some(value);
        if self.requested {
            Offer::Coalesced
        } else {
            self.requested = true;
            Offer::RequestFrame
        }
    }

    /// Takes the pending value at a frame boundary.
    pub fn take(&mut self) -> Option<T> {
        self.requested = false;
        self.pending.take()
    }

    /// Drops the pending value, if any.
    ///
    /// A frame that was already requested will find nothing to apply.
    pub fn cancel(&mut self) -> bool {
        self.requested = false;
        self.pending.take().is_some()
    }

    /// Returns `true` if a value is waiting for the next frame.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Debounce state for the "turn transitions off again" timer.
///
/// Each [`arm`](Self::arm) supersedes the previous timer; only the most
/// recently armed id fires.
#[derive(Clone, Debug, Default)]
pub struct TransitionTimer {
    next_id: u64,
    armed: Option<TimerId>,
}

impl TransitionTimer {
    /// Creates an idle timer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next_id: 0,
            armed: None,
        }
    }

    /// Arms a new timer, returning its id and the id it superseded.
    pub fn arm(&mut self) -> (TimerId, Option<TimerId>) {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        (id, self.armed.replace(id))
    }

    /// Handles an expiry. Returns `true` only for the current timer, which
    /// is then disarmed.
    pub fn fire(&mut self, id: TimerId) -> bool {
        if self.armed == Some(id) {
            self.armed = None;
            true
        } else {
            false
        }
    }

    /// Disarms the timer, returning the id that was pending.
    pub fn cancel(&mut self) -> Option<TimerId> {
        self.armed.take()
    }

    /// Returns `true` while a timer is pending.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }
}
