// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard bindings for viewport navigation.
//!
//! | chord              | action                  |
//! |--------------------|-------------------------|
//! | arrows             | pan (Shift: fast pan)   |
//! | `+` / `=`          | zoom in                 |
//! | `-`                | zoom out                |
//! | Ctrl+`0`           | reset view              |
//! | Cmd/Meta+`0`       | reset view to center    |
//! | Shift+`G`          | toggle grid             |
//! | Shift+`R`          | toggle rulers           |

use kurbo::Vec2;

use crate::input::{Key, KeyInput, Modifiers};

/// Direction the *view* moves in.
///
/// Panning the view left moves the content right, so the translation
/// changes in the opposite direction to the name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanDirection {
    /// Reveal content to the left.
    Left,
    /// Reveal content to the right.
    Right,
    /// Reveal content above.
    Up,
    /// Reveal content below.
    Down,
}

impl PanDirection {
    /// Translation change for panning `distance` pixels in this direction.
    #[must_use]
    pub fn translate_delta(self, distance: f64) -> Vec2 {
        match self {
            Self::Left => Vec2::new(distance, 0.0),
            Self::Right => Vec2::new(-distance, 0.0),
            Self::Up => Vec2::new(0.0, distance),
            Self::Down => Vec2::new(0.0, -distance),
        }
    }
}

/// A navigation action bound to a key chord.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Pan one keyboard step.
    Pan {
        /// Which way.
        direction: PanDirection,
        /// Multiply the step by the fast multiplier.
        fast: bool,
    },
    /// Zoom in one keyboard step around the viewport center.
    ZoomIn,
    /// Zoom out one keyboard step around the viewport center.
    ZoomOut,
    /// Scale 1, origin at the top‑left.
    ResetView,
    /// Scale 1 around the viewport center.
    ResetViewToCenter,
    /// Show or hide the grid.
    ToggleGrid,
    /// Show or hide the rulers.
    ToggleRulers,
}

fn shift_only(modifiers: Modifiers) -> bool {
    modifiers.contains(Modifiers::SHIFT)
        && !modifiers.intersects(Modifiers::CTRL | Modifiers::META | Modifiers::ALT)
}

/// Maps a key press to a navigation action.
#[must_use]
pub fn map_key(input: &KeyInput) -> Option<KeyAction> {
    let m = input.modifiers;
    let pan = |direction| {
        Some(KeyAction::Pan {
            direction,
            fast: m.contains(Modifiers::SHIFT),
        })
    };
    match input.key {
        Key::ArrowLeft => pan(PanDirection::Left),
        Key::ArrowRight => pan(PanDirection::Right),
        Key::ArrowUp => pan(PanDirection::Up),
        Key::ArrowDown => pan(PanDirection::Down),
        Key::Character('=' | '+') => Some(KeyAction::ZoomIn),
        Key::Character('-') => Some(KeyAction::ZoomOut),
        Key::Character('0') if m.contains(Modifiers::CTRL) => Some(KeyAction::ResetView),
        Key::Character('0') if m.contains(Modifiers::META) => Some(KeyAction::ResetViewToCenter),
        Key::Character('g' | 'G') if shift_only(m) => Some(KeyAction::ToggleGrid),
        Key::Character('r' | 'R') if shift_only(m) => Some(KeyAction::ToggleRulers),
        _ => None,
    }
}

/// Returns `true` for chords the viewport claims even when a host would
/// otherwise forward keys elsewhere (reset, grid and ruler toggles).
#[must_use]
pub fn is_canvas_shortcut(input: &KeyInput) -> bool {
    matches!(
        map_key(input),
        Some(
            KeyAction::ResetView
                | KeyAction::ResetViewToCenter
                | KeyAction::ToggleGrid
                | KeyAction::ToggleRulers
        )
    )
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::{KeyAction, PanDirection, is_canvas_shortcut, map_key};
    use crate::input::{Key, KeyInput, Modifiers};

    #[test]
    fn arrows_pan_with_optional_fast_step() {
        assert_eq!(
            map_key(&KeyInput::new(Key::ArrowLeft)),
            Some(KeyAction::Pan {
                direction: PanDirection::Left,
                fast: false
            })
        );
        assert_eq!(
            map_key(&KeyInput::new(Key::ArrowDown).with_modifiers(Modifiers::SHIFT)),
            Some(KeyAction::Pan {
                direction: PanDirection::Down,
                fast: true
            })
        );
    }

    #[test]
    fn pan_direction_moves_content_opposite() {
        assert_eq!(PanDirection::Left.translate_delta(50.0), Vec2::new(50.0, 0.0));
        assert_eq!(PanDirection::Right.translate_delta(50.0), Vec2::new(-50.0, 0.0));
        assert_eq!(PanDirection::Up.translate_delta(50.0), Vec2::new(0.0, 50.0));
        assert_eq!(PanDirection::Down.translate_delta(50.0), Vec2::new(0.0, -50.0));
    }

    #[test]
    fn zoom_keys() {
        for c in ['=', '+'] {
            assert_eq!(map_key(&KeyInput::new(Key::Character(c))), Some(KeyAction::ZoomIn));
        }
        assert_eq!(
            map_key(&KeyInput::new(Key::Character('-'))),
            Some(KeyAction::ZoomOut)
        );
    }

    #[test]
    fn reset_chords() {
        let zero = KeyInput::new(Key::Character('0'));
        assert_eq!(map_key(&zero), None);
        assert_eq!(
            map_key(&zero.with_modifiers(Modifiers::CTRL)),
            Some(KeyAction::ResetView)
        );
        assert_eq!(
            map_key(&zero.with_modifiers(Modifiers::META)),
            Some(KeyAction::ResetViewToCenter)
        );
    }

    #[test]
    fn toggles_need_plain_shift() {
        let g = KeyInput::new(Key::Character('G'));
        assert_eq!(map_key(&g), None);
        assert_eq!(
            map_key(&g.with_modifiers(Modifiers::SHIFT)),
            Some(KeyAction::ToggleGrid)
        );
        assert_eq!(
            map_key(&g.with_modifiers(Modifiers::SHIFT | Modifiers::CTRL)),
            None
        );
        assert!(is_canvas_shortcut(
            &KeyInput::new(Key::Character('r')).with_modifiers(Modifiers::SHIFT)
        ));
        assert!(!is_canvas_shortcut(&KeyInput::new(Key::ArrowUp)));
    }
}
