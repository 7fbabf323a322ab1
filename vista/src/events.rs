// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed change notifications.
//!
//! Each [`Subscribers`] list carries one payload type. Delivery happens
//! strictly after the change it reports. With the `std` feature a handler
//! that panics is logged and skipped; the remaining handlers still run and
//! the panicking handler stays subscribed.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Vec2;
use vista_ruler::RulerLayout;
use vista_view::Transform;

/// Handle returned by [`Subscribers::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Handler<T> = Box<dyn FnMut(&T)>;

/// An ordered list of handlers for one event type.
pub struct Subscribers<T> {
    name: &'static str,
    next_id: u64,
    handlers: Vec<(SubscriptionId, Handler<T>)>,
}

impl<T> fmt::Debug for Subscribers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("name", &self.name)
            .field("handlers", &self.handlers.len())
            .finish_non_exhaustive()
    }
}

impl<T> Subscribers<T> {
    /// Creates an empty list; `name` only appears in diagnostics.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            next_id: 0,
            handlers: Vec::new(),
        }
    }

    /// Adds a handler.
    pub fn subscribe(&mut self, handler: impl FnMut(&T) + 'static) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Removes a handler. Returns `false` if it was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(h, _)| *h != id);
        self.handlers.len() != before
    }

    /// Removes all handlers.
    pub fn clear(&mut self) {
        self.handlers.clear();
    }

    /// Number of handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns `true` if nobody is listening.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Delivers `value` to every handler once, in subscription order.
    ///
    /// Returns the number of handlers that completed.
    pub fn publish(&mut self, value: &T) -> usize {
        let mut delivered = 0;
        for (id, handler) in &mut self.handlers {
            if invoke(handler, value) {
                delivered += 1;
            } else {
                log::warn!("{} handler {:?} panicked; continuing", self.name, id);
            }
        }
        delivered
    }
}

#[cfg(feature = "std")]
fn invoke<T>(handler: &mut Handler<T>, value: &T) -> bool {
    std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| handler(value))).is_ok()
}

#[cfg(not(feature = "std"))]
fn invoke<T>(handler: &mut Handler<T>, value: &T) -> bool {
    handler(value);
    true
}

/// All notification channels of a [`Viewport`](crate::Viewport).
///
/// After every transform change the viewport publishes, in order, to
/// `transform`, `zoom` (the new scale) and `pan` (the new translation).
/// `rulers` receives a fresh [`RulerLayout`] after transform changes while
/// rulers or the grid are shown, and whenever their visibility changes.
#[derive(Debug)]
pub struct Events {
    /// New transform.
    pub transform: Subscribers<Transform>,
    /// New scale.
    pub zoom: Subscribers<f64>,
    /// New translation.
    pub pan: Subscribers<Vec2>,
    /// New ruler and grid layout.
    pub rulers: Subscribers<RulerLayout>,
}

impl Default for Events {
    fn default() -> Self {
        Self::new()
    }
}

impl Events {
    /// Creates channels with no subscribers.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            transform: Subscribers::new("transform"),
            zoom: Subscribers::new("zoom"),
            pan: Subscribers::new("pan"),
            rulers: Subscribers::new("rulers"),
        }
    }

    /// Removes every subscriber from every channel.
    pub fn clear(&mut self) {
        self.transform.clear();
        self.zoom.clear();
        self.pan.clear();
        self.rulers.clear();
    }
}
