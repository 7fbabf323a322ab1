// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vista_ruler --heading-base-level=0

//! Vista Ruler: headless ruler ticks and grid sizing for a zoomable view.
//!
//! Given a view [`Transform`](vista_view::Transform) and the canvas size,
//! this crate answers "where do ruler ticks and grid lines go?" without
//! drawing anything:
//!
//! - [`tick_spacing`]: a readable `{1, 2, 5}·10ⁿ` spacing for a visible span.
//! - [`ticks`]: tick positions, major/minor classification and labels along
//!   one axis.
//! - [`GridMetrics`]: grid cell size that stays within a pixel range as the
//!   view zooms, plus the grid's phase.
//! - [`RulerLayout`]: both rulers and the grid for one view.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use vista_ruler::{RulerLayout, RulerOptions};
//! use vista_view::Transform;
//!
//! let view = Transform::new(0.5, Vec2::new(-100.0, 0.0));
//! let layout = RulerLayout::compute(&view, Size::new(800.0, 600.0), &RulerOptions::default(), true);
//!
//! // The canvas starts at content x = 200.
//! assert_eq!(layout.visible.x0, 200.0);
//! assert!(layout.horizontal.iter().all(|t| t.position % layout.horizontal_spacing == 0.0));
//! assert!(layout.grid.is_some());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod grid;
mod layout;
mod spacing;
mod ticks;

pub use grid::{GridMetrics, GridSettings};
pub use layout::{RulerLayout, RulerOptions};
pub use spacing::{MAX_TARGET_TICKS, MIN_TARGET_TICKS, TARGET_TICK_PIXELS, tick_spacing};
pub use ticks::{AxisSpan, Tick, TickOptions, Ticks, ticks};
