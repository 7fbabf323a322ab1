// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input handlers.
//!
//! Every handler returns `true` when the viewport consumed the event, which
//! hosts typically use to suppress the platform default (page scroll,
//! browser zoom, text selection).

use kurbo::Point;
use vista_gesture::click::{ClickResult, exceeds_click_movement};
use vista_gesture::keyboard::{KeyAction, map_key};
use vista_gesture::touch::TouchPoints;
use vista_gesture::wheel::{TRACKPAD_PINCH_SPEED_FACTOR, WheelAction, classify, zoom_multiplier};
use vista_gesture::{Key, KeyInput, Modifiers, PointerButton, PointerInput, WheelInput};
use vista_view::{Transform, zoom_by_factor};

use super::{PendingUpdate, Viewport};
use crate::surface::Surface;

impl<S: Surface> Viewport<S> {
    fn to_canvas_points(&self, points: &[Point]) -> TouchPoints {
        points.iter().map(|p| self.to_canvas(*p)).collect()
    }

    /// Wheel and trackpad scroll.
    ///
    /// Trackpad scrolling pans on the next frame. Mouse wheels and pinches
    /// zoom around the pointer immediately.
    pub fn on_wheel(&mut self, input: &WheelInput) -> bool {
        let info = classify(input);
        match info.action() {
            WheelAction::Pan => {
                if !self.config.enable_pan {
                    return false;
                }
                self.schedule(PendingUpdate::Scroll(input.delta));
                true
            }
            WheelAction::Zoom { pinch } => {
                if !self.config.enable_zoom || input.delta.y == 0.0 {
                    return false;
                }
                let base = if pinch {
                    self.config.zoom_speed * TRACKPAD_PINCH_SPEED_FACTOR
                } else {
                    self.config.zoom_speed
                };
                let factor = zoom_multiplier(input.delta.y, self.zoom_speed(base));
                let anchor = self.to_canvas(input.position);
                let next = zoom_by_factor(self.transform, anchor, factor, self.config.limits());
                self.continuous(next);
                true
            }
        }
    }

    /// Button press. Arms a drag and starts click recognition.
    pub fn on_pointer_down(&mut self, input: &PointerInput) -> bool {
        let pos = self.to_canvas(input.position);
        if input.button == PointerButton::Primary {
            self.interaction.click.on_down(pos, input.time_ms);
        }
        if !self.interaction.can_start_drag(input.button, &self.config) {
            return false;
        }
        self.frame.cancel();
        self.interaction.drag.start(pos, input.button);
        self.interaction.dragging = false;
        true
    }

    /// Pointer motion. An armed drag starts panning once it moves past the
    /// click threshold.
    pub fn on_pointer_move(&mut self, input: &PointerInput) -> bool {
        let pos = self.to_canvas(input.position);
        let moved = self.interaction.click.on_move(pos);
        if !self.interaction.drag.is_dragging() {
            return false;
        }
        if !self.interaction.dragging {
            let past_threshold = moved
                || self
                    .interaction
                    .drag
                    .total_offset(pos)
                    .is_some_and(exceeds_click_movement);
            if !past_threshold {
                return false;
            }
            log::trace!("drag started at {pos:?}");
            self.interaction.dragging = true;
            self.update_cursor();
        }
        self.schedule(PendingUpdate::Drag(pos));
        true
    }

    /// Button release. Ends a drag, or zooms to a clicked point.
    pub fn on_pointer_up(&mut self, input: &PointerInput) -> bool {
        let mut handled = false;
        if self.interaction.drag.is_drag_button(input.button) {
            self.flush_frame();
            handled = self.interaction.dragging;
            self.interaction.end_drag();
            self.update_cursor();
        }
        if input.button == PointerButton::Primary
            && let ClickResult::Click(pos) = self.interaction.click.on_up(input.time_ms)
            && self.click_zoom_allowed(input.modifiers)
        {
            handled |= self.click_to_zoom(pos);
        }
        handled
    }

    /// Pointer left the viewport; any drag ends where it is.
    pub fn on_pointer_leave(&mut self) -> bool {
        self.flush_frame();
        let was_dragging = self.interaction.dragging;
        self.interaction.end_drag();
        self.interaction.click.reset();
        self.update_cursor();
        was_dragging
    }

    fn click_zoom_allowed(&self, modifiers: Modifiers) -> bool {
        self.config.enable_click_to_zoom
            && self.interaction.drag_enabled
            && (!self.config.require_option_for_click_zoom || modifiers.contains(Modifiers::ALT))
    }

    /// Sets the click zoom level and brings the clicked content point to
    /// the canvas center.
    fn click_to_zoom(&mut self, canvas_pt: Point) -> bool {
        let content = self.transform.to_content(canvas_pt);
        let scale = self.config.limits().clamp(self.config.click_zoom_level);
        let center = self.canvas_center();
        log::debug!("click zoom at {content:?}");
        self.discrete(Transform::new(
            scale,
            center.to_vec2() - content.to_vec2() * scale,
        ))
    }

    /// Touches began; `points` are all active touches.
    pub fn on_touch_start(&mut self, points: &[Point]) -> bool {
        if !self.config.enable_touch {
            return false;
        }
        self.frame.cancel();
        let points = self.to_canvas_points(points);
        self.interaction.touch.start(&points);
        true
    }

    /// Touches moved; `points` are all active touches.
    pub fn on_touch_move(&mut self, points: &[Point]) -> bool {
        if !self.config.enable_touch || !self.interaction.touch.is_active() {
            return false;
        }
        let points = self.to_canvas_points(points);
        self.schedule(PendingUpdate::Touch(points));
        true
    }

    /// Touches ended; `remaining` are the touches still down.
    pub fn on_touch_end(&mut self, remaining: &[Point]) -> bool {
        if !self.config.enable_touch {
            return false;
        }
        self.flush_frame();
        let remaining = self.to_canvas_points(remaining);
        self.interaction.touch.end(&remaining);
        true
    }

    /// Key press: space for the drag gate, then navigation bindings.
    pub fn on_key_down(&mut self, input: &KeyInput) -> bool {
        if input.key == Key::Space && self.config.require_space_for_mouse_drag {
            self.interaction.space_held = true;
            self.update_cursor();
            return true;
        }
        if !self.config.enable_keyboard {
            return false;
        }
        let Some(action) = map_key(input) else {
            return false;
        };
        log::debug!("key action {action:?}");
        match action {
            KeyAction::Pan { direction, fast } => {
                let mut step = self.config.keyboard_pan_step;
                if fast {
                    step *= self.config.keyboard_fast_multiplier;
                }
                self.pan(direction, step);
            }
            KeyAction::ZoomIn => {
                let factor = self.zoom_speed(self.config.keyboard_zoom_step);
                self.zoom_in(factor);
            }
            KeyAction::ZoomOut => {
                let factor = self.zoom_speed(self.config.keyboard_zoom_step);
                self.zoom_out(factor);
            }
            KeyAction::ResetView => {
                self.reset_view();
            }
            KeyAction::ResetViewToCenter => {
                self.reset_view_to_center();
            }
            KeyAction::ToggleGrid => {
                self.toggle_grid();
            }
            KeyAction::ToggleRulers => {
                self.toggle_rulers();
            }
        }
        true
    }

    /// Key release. Letting go of space ends a space‑gated drag.
    pub fn on_key_up(&mut self, input: &KeyInput) -> bool {
        if input.key != Key::Space || !self.config.require_space_for_mouse_drag {
            return false;
        }
        self.interaction.space_held = false;
        self.frame.cancel();
        self.interaction.end_drag();
        self.update_cursor();
        true
    }
}
