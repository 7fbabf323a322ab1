// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vista_view --heading-base-level=0

//! Vista View: scale+translate view transforms over a 2D content plane.
//!
//! This crate provides the numeric core of a pan/zoom viewport, as plain
//! values and pure functions:
//! - [`Transform`]: the `content * scale + translate = viewport` map and its
//!   inverse.
//! - [`ZoomLimits`]: the zoom range every mutation is clamped into.
//! - [`zoom_to_point`] / [`zoom_by_factor`]: zoom while keeping an anchor
//!   point fixed on screen.
//! - [`visible_area`] / [`Bounds`]: what part of the content is on screen and
//!   which directions can still be panned or zoomed.
//! - [`fit_to_screen`], [`center_content`], [`center_on_point`]: fitting and
//!   centering helpers.
//!
//! It does **not** own any state. The `vista` crate keeps the live transform,
//! feeds it input, and decides when to apply results; this crate only says
//! what the next transform should be.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use vista_view::{Bounds, Transform, ZoomLimits, zoom_to_point};
//!
//! let limits = ZoomLimits::new(0.05, 80.0);
//! let viewport = Size::new(800.0, 600.0);
//! let content = Size::new(8000.0, 8000.0);
//!
//! // Zoom in around the viewport center.
//! let anchor = Point::new(400.0, 300.0);
//! let t = zoom_to_point(Transform::IDENTITY, anchor, 2.0, limits);
//!
//! // The content under the anchor did not move.
//! assert_eq!(t.to_content(anchor), Point::new(400.0, 300.0));
//!
//! let bounds = Bounds::compute(viewport, content, t, limits);
//! assert_eq!(bounds.visible_area.width(), 400.0);
//! ```
//!
//! ## Design notes
//!
//! - Zoom is uniform and there is no rotation.
//! - Clamping is never silent state: functions return a new transform and
//!   boundary hits simply produce an unchanged one.
//! - Degenerate geometry (zero scale, empty viewport, empty content)
//!   produces identity or zero‑extent results rather than `NaN`.
//!
//! This crate is `no_std`.

#![no_std]

mod bounds;
mod fit;
mod limits;
mod transform;
mod zoom;

pub use bounds::{Bounds, visible_area};
pub use fit::{FIT_PADDING, center_content, center_on_point, fit_to_screen};
pub use limits::ZoomLimits;
pub use transform::Transform;
pub use zoom::{ZOOM_CHANGE_THRESHOLD, zoom_by_factor, zoom_to_point};
