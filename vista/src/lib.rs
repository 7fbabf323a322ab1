// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vista --heading-base-level=0

//! Vista: a pan/zoom viewport engine.
//!
//! A [`Viewport`] owns the view [`Transform`] of a large content plane and
//! drives a host display through the [`Surface`] trait. The host forwards
//! raw input (wheel, pointer, touch, keys) and its frame and timer
//! callbacks; the viewport turns them into clamped transform updates:
//!
//! - Mouse wheels zoom around the pointer, trackpads pan, pinches zoom
//!   slowly (see [`vista_gesture::wheel`]).
//! - Drags, touch moves and trackpad pans are coalesced to one update per
//!   frame, latest input winning.
//! - Discrete operations (keyboard, click‑to‑zoom, the programmatic API)
//!   animate through a debounced transition window.
//! - Subscribers in [`Events`] hear about every change after it happened.
//! - [`Command`]s and a [`Registry`] let remote callers drive named
//!   instances.
//!
//! Hosts without a frame clock or timers keep the default [`Surface`]
//! hooks; every update is then applied synchronously, without transitions.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use vista::{Surface, Transform, Viewport, ViewportConfig};
//! use vista::gesture::{DeltaMode, Modifiers, WheelInput};
//!
//! struct Screen {
//!     shown: Transform,
//! }
//!
//! impl Surface for Screen {
//!     fn viewport_size(&self) -> Size {
//!         Size::new(800.0, 600.0)
//!     }
//!     fn apply_transform(&mut self, transform: &Transform) {
//!         self.shown = *transform;
//!     }
//! }
//!
//! let config = ViewportConfig { enable_rulers: false, ..Default::default() };
//! let mut view = Viewport::new(Screen { shown: Transform::IDENTITY }, config).unwrap();
//!
//! view.zoom_to_point(Point::new(400.0, 300.0), 2.0);
//! assert_eq!(view.transform(), Transform::new(2.0, Vec2::new(-400.0, -300.0)));
//!
//! // A mouse wheel notch up zooms in around the pointer.
//! view.on_wheel(&WheelInput {
//!     position: Point::new(400.0, 300.0),
//!     delta: Vec2::new(0.0, -120.0),
//!     delta_mode: DeltaMode::Pixel,
//!     modifiers: Modifiers::empty(),
//! });
//! assert!(view.transform().scale > 2.0);
//! assert_eq!(view.surface().shown, view.transform());
//! ```
//!
//! This crate is `no_std` and uses `alloc`. With the `std` feature (on by
//! default) a panicking subscriber is logged and skipped instead of
//! unwinding through the viewport.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod command;
mod config;
mod events;
mod interaction;
mod registry;
mod schedule;
mod surface;
mod viewport;

pub use vista_gesture as gesture;
pub use vista_ruler as ruler;
pub use vista_view as view;

pub use vista_view::{Bounds, Transform, ZoomLimits};

pub use command::{ACCEPTED_SOURCES, Command, CommandError, Execute, Request};
pub use config::{ConfigError, ViewportConfig};
pub use events::{Events, Subscribers, SubscriptionId};
pub use interaction::Interaction;
pub use registry::{DispatchError, Registry};
pub use schedule::{FrameCoalescer, Offer, TransitionTimer};
pub use surface::{CursorHint, Surface, TimerId};
pub use viewport::{DEFAULT_NAME, DEFAULT_ZOOM_FACTOR, Viewport};
