// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use vista_gesture::PointerButton;
use vista_gesture::click::ClickState;
use vista_gesture::drag::DragState;
use vista_gesture::touch::TouchState;

use crate::config::ViewportConfig;
use crate::surface::CursorHint;

/// Per‑session input state shared by the viewport's input handlers.
#[derive(Clone, Debug)]
pub struct Interaction {
    /// Drag tracking; armed on button down.
    pub drag: DragState,
    /// Click vs drag recognition for the primary button.
    pub click: ClickState,
    /// Touch gesture tracking.
    pub touch: TouchState,
    /// The armed drag moved past the click threshold and is panning.
    pub dragging: bool,
    /// The space bar is held.
    pub space_held: bool,
    /// Mouse dragging is switched on.
    pub drag_enabled: bool,
}

impl Default for Interaction {
    fn default() -> Self {
        Self {
            drag: DragState::default(),
            click: ClickState::new(),
            touch: TouchState::default(),
            dragging: false,
            space_held: false,
            drag_enabled: true,
        }
    }
}

impl Interaction {
    /// Returns `true` if `button` may start a drag right now.
    #[must_use]
    pub fn can_start_drag(&self, button: PointerButton, config: &ViewportConfig) -> bool {
        if !(self.drag_enabled && config.enable_pan) {
            return false;
        }
        if config.require_space_for_mouse_drag && !self.space_held {
            return false;
        }
        match button {
            PointerButton::Primary => config.enable_left_drag,
            PointerButton::Auxiliary => config.enable_middle_drag,
            _ => false,
        }
    }

    /// Stops any drag, armed or active.
    pub fn end_drag(&mut self) {
        self.drag.end();
        self.dragging = false;
    }

    /// Cursor for the current state.
    #[must_use]
    pub fn cursor(&self, config: &ViewportConfig) -> CursorHint {
        if !self.drag_enabled {
            CursorHint::Default
        } else if self.dragging {
            CursorHint::Grabbing
        } else if config.require_space_for_mouse_drag && !self.space_held {
            CursorHint::Default
        } else {
            CursorHint::Grab
        }
    }

    /// Forgets every in‑progress gesture; keeps the drag enable switch.
    pub fn reset(&mut self) {
        *self = Self {
            drag_enabled: self.drag_enabled,
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use vista_gesture::PointerButton;

    use super::Interaction;
    use crate::config::ViewportConfig;
    use crate::surface::CursorHint;

    #[test]
    fn drag_buttons_follow_config() {
        let i = Interaction::default();
        let config = ViewportConfig {
            enable_middle_drag: false,
            ..ViewportConfig::default()
        };
        assert!(i.can_start_drag(PointerButton::Primary, &config));
        assert!(!i.can_start_drag(PointerButton::Auxiliary, &config));
        assert!(!i.can_start_drag(PointerButton::Secondary, &config));
    }

    #[test]
    fn space_gate() {
        let mut i = Interaction::default();
        let config = ViewportConfig {
            require_space_for_mouse_drag: true,
            ..ViewportConfig::default()
        };
        assert!(!i.can_start_drag(PointerButton::Primary, &config));
        assert_eq!(i.cursor(&config), CursorHint::Default);
        i.space_held = true;
        assert!(i.can_start_drag(PointerButton::Primary, &config));
        assert_eq!(i.cursor(&config), CursorHint::Grab);
    }

    #[test]
    fn disabled_drag_wins() {
        let mut i = Interaction::default();
        i.drag_enabled = false;
        i.dragging = true;
        let config = ViewportConfig::default();
        assert!(!i.can_start_drag(PointerButton::Primary, &config));
        assert_eq!(i.cursor(&config), CursorHint::Default);

        i.reset();
        assert!(!i.drag_enabled);
        assert!(!i.dragging);
    }
}
