// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick placement along one ruler axis.
//!
//! Ticks sit on whole multiples of the spacing, from the multiple at or
//! before the visible start to the one at or after the visible end. Ticks
//! whose pixel position falls more than [`TickOptions::overscan`] pixels
//! outside the ruler are skipped.

use crate::spacing::tick_spacing;

/// Tolerance, relative to the label interval, for "on a label boundary".
const LABEL_EPSILON: f64 = 1e-9;

/// Tick layout knobs.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct TickOptions {
    /// Every `major_every`-th multiple of the spacing is a major tick.
    pub major_every: u32,
    /// Content units between labels on minor ticks; major ticks are always
    /// labeled.
    pub label_interval: f64,
    /// Pixels past either end of the ruler that still get ticks.
    pub overscan: f64,
}

impl Default for TickOptions {
    fn default() -> Self {
        Self {
            major_every: 5,
            label_interval: 100.0,
            overscan: 50.0,
        }
    }
}

/// The visible stretch of one content axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisSpan {
    /// Content coordinate at the ruler's leading edge.
    pub start: f64,
    /// Content coordinate at the ruler's trailing edge.
    pub end: f64,
    /// Ruler length in pixels.
    pub pixels: f64,
}

impl AxisSpan {
    /// Span covering `pixels` pixels starting at content coordinate `start`,
    /// at `scale` pixels per content unit.
    #[must_use]
    pub fn from_scale(start: f64, pixels: f64, scale: f64) -> Self {
        Self {
            start,
            end: start + pixels / scale,
            pixels,
        }
    }

    /// Pixels per content unit.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.pixels / (self.end - self.start)
    }

    /// Nice tick spacing for this span.
    #[must_use]
    pub fn spacing(&self) -> f64 {
        tick_spacing(self.end - self.start, self.pixels)
    }
}

/// One ruler tick.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick {
    /// Content coordinate.
    pub position: f64,
    /// Offset in pixels from the ruler's leading edge.
    pub pixel: f64,
    /// Major (longer, always labeled) tick.
    pub major: bool,
    /// Label value, the content coordinate rounded to an integer.
    pub label: Option<f64>,
}

/// Iterator over the ticks of an [`AxisSpan`].
///
/// Created by [`ticks`].
#[derive(Clone, Debug)]
pub struct Ticks {
    span: AxisSpan,
    options: TickOptions,
    spacing: f64,
    scale: f64,
    next: f64,
    remaining: f64,
}

/// Lays out ticks for `span`.
///
/// Degenerate spans (empty, reversed, or non‑finite) produce no ticks.
///
/// ```
/// use vista_ruler::{AxisSpan, TickOptions, ticks};
///
/// // 0..1000 units over 1000 px: spacing 50, a major tick every 250.
/// let span = AxisSpan { start: 0.0, end: 1000.0, pixels: 1000.0 };
/// let all: Vec<_> = ticks(span, TickOptions::default()).collect();
/// assert_eq!(all.len(), 21);
/// assert!(all[0].major);
/// assert_eq!(all[2].label, Some(100.0));
/// assert_eq!(all[3].label, None);
/// ```
#[must_use]
pub fn ticks(span: AxisSpan, options: TickOptions) -> Ticks {
    let spacing = span.spacing();
    let scale = span.scale();
    let valid = span.start.is_finite()
        && span.end.is_finite()
        && span.end > span.start
        && scale.is_finite()
        && scale > 0.0;
    let (next, remaining) = if valid {
        let first = libm::floor(span.start / spacing);
        let last = libm::ceil(span.end / spacing);
        // Far from the origin `last - first` loses precision; the pixel
        // extent bounds the count independently.
        let extent = span.pixels + 2.0 * options.overscan;
        let visible = libm::ceil(extent / (spacing * scale)) + 2.0;
        let count = finite_count(last - first + 1.0).min(finite_count(visible));
        (first, count)
    } else {
        (0.0, 0.0)
    };
    Ticks {
        span,
        options,
        spacing,
        scale,
        next,
        remaining,
    }
}

fn finite_count(n: f64) -> f64 {
    if n.is_finite() && n > 0.0 { n } else { 0.0 }
}

impl Ticks {
    /// Spacing between consecutive ticks, in content units.
    #[must_use]
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    fn make(&self, index: f64) -> Tick {
        let position = index * self.spacing;
        let major_every = f64::from(self.options.major_every.max(1));
        let major = index % major_every == 0.0;
        let label_interval = self.options.label_interval;
        let on_label = label_interval > 0.0 && {
            let q = position / label_interval;
            (q - libm::round(q)).abs() < LABEL_EPSILON
        };
        Tick {
            position,
            pixel: (position - self.span.start) * self.scale,
            major,
            label: (major || on_label).then(|| libm::round(position)),
        }
    }
}

impl Iterator for Ticks {
    type Item = Tick;

    fn next(&mut self) -> Option<Tick> {
        let overscan = self.options.overscan;
        while self.remaining >= 1.0 {
            let tick = self.make(self.next);
            let advanced = self.next + 1.0;
            self.remaining -= 1.0;
            if advanced == self.next {
                // The index no longer has unit precision.
                self.remaining = 0.0;
            }
            self.next = advanced;
            if tick.pixel >= -overscan && tick.pixel <= self.span.pixels + overscan {
                return Some(tick);
            }
        }
        None
    }
}
