// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vista_gesture --heading-base-level=0

//! Vista Gesture: input classification and gesture state for pan/zoom viewports.
//!
//! This crate turns raw, host‑neutral input records into viewport intents. It
//! does not touch any transform itself; each module answers one question:
//!
//! - [`wheel`]: is this wheel event a mouse wheel, a trackpad scroll, or a
//!   trackpad pinch, and should it pan or zoom?
//! - [`speed`]: how fast should zooming be on a viewport of this size?
//! - [`touch`]: is this touch move a one‑finger pan or a two‑finger pinch?
//! - [`drag`]: how far has the pointer moved since the last applied frame?
//! - [`click`]: was this press a click or the start of a drag?
//! - [`keyboard`]: which navigation action does this key chord map to?
//!
//! The input records themselves ([`WheelInput`], [`PointerInput`],
//! [`KeyInput`]) live at the crate root so hosts can build them without
//! depending on any particular windowing library.
//!
//! ## Classifying a wheel event
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use vista_gesture::{DeltaMode, Modifiers, WheelInput, wheel::{WheelAction, classify}};
//!
//! // A classic mouse wheel notch: large, integral, vertical only.
//! let notch = WheelInput {
//!     position: Point::new(100.0, 100.0),
//!     delta: Vec2::new(0.0, 100.0),
//!     delta_mode: DeltaMode::Pixel,
//!     modifiers: Modifiers::empty(),
//! };
//! assert_eq!(classify(&notch).action(), WheelAction::Zoom { pinch: false });
//!
//! // A fractional two‑axis delta is a trackpad scroll.
//! let scroll = WheelInput { delta: Vec2::new(1.5, 2.25), ..notch };
//! assert_eq!(classify(&scroll).action(), WheelAction::Pan);
//! ```
//!
//! ## Click vs drag
//!
//! ```rust
//! use kurbo::Point;
//! use vista_gesture::click::{ClickResult, ClickState};
//!
//! let mut press = ClickState::new();
//! press.on_down(Point::new(10.0, 10.0), 1_000);
//! press.on_move(Point::new(12.0, 11.0));
//! assert_eq!(press.on_up(1_120), ClickResult::Click(Point::new(10.0, 10.0)));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod input;

pub mod click;
pub mod drag;
pub mod keyboard;
pub mod speed;
pub mod touch;
pub mod wheel;

pub use input::{DeltaMode, Key, KeyInput, Modifiers, PointerButton, PointerInput, WheelInput};
