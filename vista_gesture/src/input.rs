// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw input records, as delivered by the host's event source.
//!
//! These carry only the fields the gesture logic reads. Positions are in
//! viewport pixels relative to the viewport's top‑left corner; timestamps are
//! host milliseconds from any fixed origin.

use kurbo::{Point, Vec2};

bitflags::bitflags! {
    /// Modifier keys held while an input event was produced.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT = 0b0000_0001;
        /// Control.
        const CTRL  = 0b0000_0010;
        /// Alt / Option.
        const ALT   = 0b0000_0100;
        /// Meta / Command / Windows.
        const META  = 0b0000_1000;
    }
}

impl Modifiers {
    /// Ctrl or Meta, the chord browsers attach to pinch and zoom gestures.
    #[must_use]
    pub fn zoom_intent(self) -> bool {
        self.intersects(Self::CTRL | Self::META)
    }
}

/// Unit of a wheel event's deltas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DeltaMode {
    /// Deltas are in pixels.
    #[default]
    Pixel,
    /// Deltas are in lines.
    Line,
    /// Deltas are in pages.
    Page,
}

/// A wheel or trackpad scroll event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelInput {
    /// Pointer position.
    pub position: Point,
    /// Scroll deltas, positive `y` scrolling down.
    pub delta: Vec2,
    /// Unit of `delta`.
    pub delta_mode: DeltaMode,
    /// Modifier keys held.
    pub modifiers: Modifiers,
}

/// Pointer button identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary (usually left) button.
    Primary,
    /// Auxiliary (usually middle / wheel) button.
    Auxiliary,
    /// Secondary (usually right) button.
    Secondary,
    /// Any other button.
    Other(u8),
}

/// A pointer down, move, or up event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInput {
    /// Pointer position.
    pub position: Point,
    /// The button that changed state. Ignored for moves.
    pub button: PointerButton,
    /// Modifier keys held.
    pub modifiers: Modifiers,
    /// Host timestamp in milliseconds.
    pub time_ms: u64,
}

/// Keys the viewport reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Space bar.
    Space,
    /// A printable character, as produced with the current layout.
    Character(char),
    /// Anything else.
    Other,
}

/// A key down or key up event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyInput {
    /// Logical key.
    pub key: Key,
    /// Modifier keys held.
    pub modifiers: Modifiers,
}

impl KeyInput {
    /// Creates a key event without modifiers.
    #[must_use]
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::empty(),
        }
    }

    /// Returns a copy with `modifiers` set.
    #[must_use]
    pub fn with_modifiers(self, modifiers: Modifiers) -> Self {
        Self { modifiers, ..self }
    }
}
