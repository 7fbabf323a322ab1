// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The viewport engine.

use kurbo::{Point, Rect, Size, Vec2};
use vista_gesture::keyboard::PanDirection;
use vista_gesture::speed::adaptive_zoom_speed;
use vista_gesture::touch::{TouchGesture, TouchPoints};
use vista_ruler::{RulerLayout, RulerOptions};
use vista_view::{
    Bounds, Transform, center_content, center_on_point, fit_to_screen, visible_area,
    zoom_by_factor, zoom_to_point,
};

use crate::command::{Command, CommandError, Execute};
use crate::config::{ConfigError, ViewportConfig};
use crate::events::Events;
use crate::interaction::Interaction;
use crate::schedule::{FrameCoalescer, Offer, TransitionTimer};
use crate::surface::{Surface, TimerId};

mod input;

/// Relative step of [`Viewport::zoom_in`] and [`Viewport::zoom_out`] when a
/// command does not name one.
pub const DEFAULT_ZOOM_FACTOR: f64 = 0.5;

/// Name reported by [`Viewport::name`] when the config has none.
pub const DEFAULT_NAME: &str = "vista";

/// A high‑frequency update waiting for the next frame.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum PendingUpdate {
    /// Pointer drag to a canvas position.
    Drag(Point),
    /// Touch points in canvas coordinates.
    Touch(TouchPoints),
    /// Trackpad scroll by a pixel delta.
    Scroll(Vec2),
}

/// A pan/zoom view of a content plane, displayed through a [`Surface`].
///
/// The viewport owns the [`Transform`] and is the only thing that changes
/// it. Every change is clamped into the configured zoom range, pushed to
/// the surface, and then published to [`Events`].
///
/// Positions passed to the input handlers are in viewport pixels, rulers
/// included; the programmatic API works in canvas pixels (see
/// [`Surface`]).
#[derive(Debug)]
pub struct Viewport<S> {
    surface: S,
    config: ViewportConfig,
    transform: Transform,
    interaction: Interaction,
    frame: FrameCoalescer<PendingUpdate>,
    timer: TransitionTimer,
    transitions_enabled: bool,
    rulers_visible: bool,
    grid_visible: bool,
    ruler_options: RulerOptions,
    events: Events,
}

fn is_usable(t: &Transform) -> bool {
    t.is_invertible() && t.translate.x.is_finite() && t.translate.y.is_finite()
}

impl<S: Surface> Viewport<S> {
    /// Creates a viewport showing the configured initial view.
    pub fn new(mut surface: S, config: ViewportConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let transform = initial_transform(&config);
        surface.set_rulers_visible(config.enable_rulers);
        surface.set_grid_visible(config.enable_grid);
        surface.apply_transform(&transform);
        let mut viewport = Self {
            surface,
            transitions_enabled: config.enable_transition,
            rulers_visible: config.enable_rulers,
            grid_visible: config.enable_grid,
            config,
            transform,
            interaction: Interaction::default(),
            frame: FrameCoalescer::new(),
            timer: TransitionTimer::new(),
            ruler_options: RulerOptions::default(),
            events: Events::new(),
        };
        viewport.update_cursor();
        log::debug!("created viewport {:?} at {transform:?}", viewport.name());
        Ok(viewport)
    }

    /// Replaces the configuration.
    ///
    /// The current scale is clamped into the new zoom range and the
    /// transition switch follows the new config. Ruler and grid visibility
    /// are left alone, but a visible ruler layout is republished since the
    /// ruler band may have changed.
    pub fn set_config(&mut self, config: ViewportConfig) -> Result<(), ConfigError> {
        config.validate()?;
        log::debug!("reconfiguring viewport {:?}", self.name());
        self.config = config;
        self.transitions_enabled = self.config.enable_transition;
        if !self.transitions_enabled {
            self.end_transition();
        }
        let limits = self.config.limits();
        let target = limits.clamp(self.transform.scale);
        let mut committed = false;
        if target != self.transform.scale {
            let center = self.canvas_center();
            let content = self.transform.to_content(center);
            let next = Transform::new(target, center.to_vec2() - content.to_vec2() * target);
            self.end_transition();
            committed = self.commit(next);
        }
        if !committed && (self.rulers_visible || self.grid_visible) {
            self.publish_rulers();
        }
        self.update_cursor();
        Ok(())
    }

    /// Current transform.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    /// Registry name from the config, or [`DEFAULT_NAME`].
    #[must_use]
    pub fn name(&self) -> &str {
        self.config.name.as_deref().unwrap_or(DEFAULT_NAME)
    }

    /// The display surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The display surface, mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Gives the surface back.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Notification channels.
    #[must_use]
    pub fn events(&self) -> &Events {
        &self.events
    }

    /// Notification channels, for subscribing.
    pub fn events_mut(&mut self) -> &mut Events {
        &mut self.events
    }

    /// In‑progress input state.
    #[must_use]
    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    // --- Geometry ---

    /// Thickness of the ruler band, or `0.0` while rulers are hidden.
    #[must_use]
    pub fn ruler_inset(&self) -> f64 {
        if self.rulers_visible {
            self.config.ruler_size
        } else {
            0.0
        }
    }

    /// Size of the area the transform maps into.
    #[must_use]
    pub fn canvas_size(&self) -> Size {
        let viewport = self.surface.viewport_size();
        let inset = self.ruler_inset();
        Size::new(
            (viewport.width - inset).max(0.0),
            (viewport.height - inset).max(0.0),
        )
    }

    /// Center of the canvas, in canvas pixels.
    #[must_use]
    pub fn canvas_center(&self) -> Point {
        (self.canvas_size().to_vec2() / 2.0).to_point()
    }

    /// Converts a viewport position into canvas pixels.
    #[must_use]
    pub fn to_canvas(&self, viewport_pt: Point) -> Point {
        let inset = self.ruler_inset();
        viewport_pt - Vec2::new(inset, inset)
    }

    /// Content coordinates under a canvas position.
    #[must_use]
    pub fn canvas_to_content(&self, canvas_pt: Point) -> Point {
        self.transform.to_content(canvas_pt)
    }

    /// Canvas position of a content point.
    #[must_use]
    pub fn content_to_canvas(&self, content_pt: Point) -> Point {
        self.transform.to_viewport(content_pt)
    }

    /// Derived view geometry for the current transform.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        Bounds::compute(
            self.canvas_size(),
            self.config.content_size(),
            self.transform,
            self.config.limits(),
        )
    }

    /// Visible part of the content plane, in content coordinates.
    #[must_use]
    pub fn visible_area(&self) -> Rect {
        visible_area(
            self.canvas_size(),
            self.config.content_size(),
            &self.transform,
        )
    }

    /// Returns `true` if a content point is on screen.
    #[must_use]
    pub fn is_point_visible(&self, content_pt: Point) -> bool {
        self.bounds().contains_point(content_pt)
    }

    /// Ruler and grid layout for the current transform.
    #[must_use]
    pub fn ruler_layout(&self) -> RulerLayout {
        RulerLayout::compute(
            &self.transform,
            self.canvas_size(),
            &self.ruler_options,
            self.grid_visible,
        )
    }

    /// Tick and grid tuning.
    #[must_use]
    pub fn ruler_options(&self) -> &RulerOptions {
        &self.ruler_options
    }

    /// Replaces the tick and grid tuning and republishes the layout.
    pub fn set_ruler_options(&mut self, options: RulerOptions) {
        self.ruler_options = options;
        self.publish_rulers();
    }

    // --- Mutation and publishing ---

    /// Applies and publishes `next`. Returns `false` if nothing changed.
    fn commit(&mut self, next: Transform) -> bool {
        if !is_usable(&next) {
            log::warn!("ignoring unusable transform {next:?}");
            return false;
        }
        if next == self.transform {
            return false;
        }
        self.transform = next;
        self.surface.apply_transform(&next);
        self.events.transform.publish(&next);
        self.events.zoom.publish(&next.scale);
        self.events.pan.publish(&next.translate);
        if self.rulers_visible || self.grid_visible {
            self.publish_rulers();
        }
        true
    }

    fn publish_rulers(&mut self) {
        if self.events.rulers.is_empty() {
            return;
        }
        let layout = self.ruler_layout();
        self.events.rulers.publish(&layout);
    }

    /// Applies a discrete operation, animated when transitions are on.
    fn discrete(&mut self, next: Transform) -> bool {
        self.frame.cancel();
        if !is_usable(&next) || next == self.transform {
            return false;
        }
        self.begin_transition();
        log::debug!("discrete update to {next:?}");
        self.commit(next)
    }

    /// Applies a continuous update with transitions off.
    fn continuous(&mut self, next: Transform) -> bool {
        self.end_transition();
        self.commit(next)
    }

    fn begin_transition(&mut self) {
        if !self.transitions_enabled {
            return;
        }
        let duration = self.config.transition();
        if duration.is_zero() {
            return;
        }
        let (id, superseded) = self.timer.arm();
        if let Some(old) = superseded {
            self.surface.cancel_timer(old);
        }
        if self.surface.schedule_timer(id, duration) {
            self.surface.set_transition(Some(duration));
        } else {
            self.timer.cancel();
            if superseded.is_some() {
                self.surface.set_transition(None);
            }
            log::trace!("no timers available; applying without transition");
        }
    }

    fn end_transition(&mut self) {
        if let Some(id) = self.timer.cancel() {
            self.surface.cancel_timer(id);
            self.surface.set_transition(None);
        }
    }

    /// Queues a high‑frequency update for the next frame, or applies it now
    /// if the surface has no frame clock.
    fn schedule(&mut self, update: PendingUpdate) {
        match self.frame.offer(update) {
            Offer::Coalesced => log::trace!("coalesced update"),
            Offer::RequestFrame => {
                if !self.surface.request_frame() {
                    self.on_frame();
                }
            }
        }
    }

    /// Applies a pending coalesced update before the state it depends on
    /// goes away.
    fn flush_frame(&mut self) {
        if self.frame.is_pending() {
            self.on_frame();
        }
    }

    // --- Host callbacks ---

    /// Animation frame callback. Applies the latest update queued since the
    /// previous frame.
    ///
    /// Returns `true` if the transform changed.
    pub fn on_frame(&mut self) -> bool {
        let Some(update) = self.frame.take() else {
            return false;
        };
        log::trace!("frame: {update:?}");
        let next = match update {
            PendingUpdate::Drag(pos) => {
                if !self.interaction.dragging {
                    return false;
                }
                match self.interaction.drag.update(pos) {
                    Some(delta) => self.transform.panned(delta),
                    None => return false,
                }
            }
            PendingUpdate::Touch(points) => match self.interaction.touch.update(&points) {
                TouchGesture::Pan(delta) if self.config.enable_pan => self.transform.panned(delta),
                TouchGesture::Pinch { anchor, factor } if self.config.enable_zoom => {
                    zoom_by_factor(self.transform, anchor, factor, self.config.limits())
                }
                _ => return false,
            },
            PendingUpdate::Scroll(delta) => self.transform.panned(-delta),
        };
        self.continuous(next)
    }

    /// Timer callback for ids handed to [`Surface::schedule_timer`].
    ///
    /// Only the most recent transition timer turns transitions off; stale
    /// ids return `false`.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        if self.timer.fire(id) {
            self.surface.set_transition(None);
            true
        } else {
            log::trace!("ignoring stale timer {id:?}");
            false
        }
    }

    /// Tells the viewport the surface was resized.
    ///
    /// The transform is kept; the ruler layout is republished.
    pub fn on_resize(&mut self) {
        if self.rulers_visible || self.grid_visible {
            self.publish_rulers();
        }
    }

    // --- Programmatic control ---

    /// Sets the transform directly, without a transition.
    ///
    /// The scale is clamped into the zoom range.
    pub fn update_transform(&mut self, transform: Transform) -> bool {
        let clamped = Transform::new(self.config.limits().clamp(transform.scale), transform.translate);
        self.frame.cancel();
        self.continuous(clamped)
    }

    /// Back to scale 1 with the content origin at the canvas origin,
    /// without a transition.
    pub fn reset(&mut self) -> bool {
        self.update_transform(Transform::IDENTITY)
    }

    /// Zooms in around the canvas center by `1 + factor`.
    pub fn zoom_in(&mut self, factor: f64) -> bool {
        self.zoom_to_point(self.canvas_center(), self.transform.scale * (1.0 + factor))
    }

    /// Zooms out around the canvas center by `1 + factor`.
    pub fn zoom_out(&mut self, factor: f64) -> bool {
        self.zoom_to_point(self.canvas_center(), self.transform.scale / (1.0 + factor))
    }

    /// Sets the scale around the canvas center.
    pub fn set_zoom(&mut self, level: f64) -> bool {
        self.zoom_to_point(self.canvas_center(), level)
    }

    /// Zooms to `target_scale` keeping the content under `canvas_pt` fixed.
    pub fn zoom_to_point(&mut self, canvas_pt: Point, target_scale: f64) -> bool {
        let next = zoom_to_point(self.transform, canvas_pt, target_scale, self.config.limits());
        self.discrete(next)
    }

    /// Scale 1 around the canvas center.
    pub fn reset_zoom(&mut self) -> bool {
        self.reset_view_to_center()
    }

    /// Scale 1 with the content origin at the canvas origin.
    pub fn reset_view(&mut self) -> bool {
        let next = Transform::new(self.config.limits().clamp(1.0), Vec2::ZERO);
        self.discrete(next)
    }

    /// Scale 1 around the canvas center.
    pub fn reset_view_to_center(&mut self) -> bool {
        self.set_zoom(1.0)
    }

    /// Back to the configured initial zoom and pan.
    pub fn reset_to_initial(&mut self) -> bool {
        self.discrete(initial_transform(&self.config))
    }

    /// Moves the view `distance` pixels in `direction`.
    pub fn pan(&mut self, direction: PanDirection, distance: f64) -> bool {
        self.discrete(self.transform.panned(direction.translate_delta(distance)))
    }

    /// Pans left by `distance`, or the keyboard pan step.
    pub fn pan_left(&mut self, distance: Option<f64>) -> bool {
        self.pan(PanDirection::Left, distance.unwrap_or(self.config.keyboard_pan_step))
    }

    /// Pans right by `distance`, or the keyboard pan step.
    pub fn pan_right(&mut self, distance: Option<f64>) -> bool {
        self.pan(PanDirection::Right, distance.unwrap_or(self.config.keyboard_pan_step))
    }

    /// Pans up by `distance`, or the keyboard pan step.
    pub fn pan_up(&mut self, distance: Option<f64>) -> bool {
        self.pan(PanDirection::Up, distance.unwrap_or(self.config.keyboard_pan_step))
    }

    /// Pans down by `distance`, or the keyboard pan step.
    pub fn pan_down(&mut self, distance: Option<f64>) -> bool {
        self.pan(PanDirection::Down, distance.unwrap_or(self.config.keyboard_pan_step))
    }

    /// Centers the canvas on a content point.
    pub fn pan_to_point(&mut self, content_pt: Point) -> bool {
        self.discrete(center_on_point(self.transform, self.canvas_size(), content_pt))
    }

    /// Like [`pan_to_point`](Self::pan_to_point), without a transition.
    pub fn scroll_to_point(&mut self, content_pt: Point) -> bool {
        let next = center_on_point(self.transform, self.canvas_size(), content_pt);
        self.frame.cancel();
        self.continuous(next)
    }

    /// Fits the whole content plane into the canvas.
    pub fn fit_to_screen(&mut self) -> bool {
        let next = fit_to_screen(
            self.transform,
            self.canvas_size(),
            self.config.content_size(),
            self.config.limits(),
        );
        self.discrete(next)
    }

    /// Centers the content plane at the current scale.
    pub fn center_content(&mut self) -> bool {
        let next = center_content(
            self.transform,
            self.canvas_size(),
            self.config.content_size(),
        );
        self.discrete(next)
    }

    // --- Rulers, grid, transitions ---

    /// Returns `true` while the rulers are shown.
    #[must_use]
    pub fn rulers_visible(&self) -> bool {
        self.rulers_visible
    }

    /// Shows or hides the rulers. Returns `false` if already in that state.
    ///
    /// The transform is kept, so the content shifts by the ruler band.
    pub fn set_rulers_visible(&mut self, visible: bool) -> bool {
        if self.rulers_visible == visible {
            return false;
        }
        log::debug!("rulers {}", if visible { "shown" } else { "hidden" });
        self.rulers_visible = visible;
        self.surface.set_rulers_visible(visible);
        self.publish_rulers();
        true
    }

    /// Shows the rulers.
    pub fn show_rulers(&mut self) -> bool {
        self.set_rulers_visible(true)
    }

    /// Hides the rulers.
    pub fn hide_rulers(&mut self) -> bool {
        self.set_rulers_visible(false)
    }

    /// Flips ruler visibility.
    pub fn toggle_rulers(&mut self) -> bool {
        self.set_rulers_visible(!self.rulers_visible)
    }

    /// Returns `true` while the grid is shown.
    #[must_use]
    pub fn grid_visible(&self) -> bool {
        self.grid_visible
    }

    /// Shows or hides the grid. Returns `false` if already in that state.
    pub fn set_grid_visible(&mut self, visible: bool) -> bool {
        if self.grid_visible == visible {
            return false;
        }
        log::debug!("grid {}", if visible { "shown" } else { "hidden" });
        self.grid_visible = visible;
        self.surface.set_grid_visible(visible);
        self.publish_rulers();
        true
    }

    /// Shows the grid.
    pub fn show_grid(&mut self) -> bool {
        self.set_grid_visible(true)
    }

    /// Hides the grid.
    pub fn hide_grid(&mut self) -> bool {
        self.set_grid_visible(false)
    }

    /// Flips grid visibility.
    pub fn toggle_grid(&mut self) -> bool {
        self.set_grid_visible(!self.grid_visible)
    }

    /// Returns `true` if discrete operations animate.
    #[must_use]
    pub fn transitions_enabled(&self) -> bool {
        self.transitions_enabled
    }

    /// Turns transitions on or off. Turning them off stops a running one.
    pub fn set_transitions_enabled(&mut self, enabled: bool) -> bool {
        if self.transitions_enabled == enabled {
            return false;
        }
        log::debug!("transitions {}", if enabled { "on" } else { "off" });
        self.transitions_enabled = enabled;
        if !enabled {
            self.end_transition();
        }
        true
    }

    /// Flips transitions; returns the new state.
    pub fn toggle_transitions(&mut self) -> bool {
        self.set_transitions_enabled(!self.transitions_enabled);
        self.transitions_enabled
    }

    // --- Mouse drag switch ---

    /// Allows mouse dragging again.
    pub fn enable_mouse_drag(&mut self) {
        self.interaction.drag_enabled = true;
        self.update_cursor();
    }

    /// Stops and forbids mouse dragging.
    pub fn disable_mouse_drag(&mut self) {
        self.interaction.drag_enabled = false;
        self.frame.cancel();
        self.interaction.end_drag();
        self.update_cursor();
    }

    /// Returns `true` if mouse dragging is allowed.
    #[must_use]
    pub fn is_mouse_drag_enabled(&self) -> bool {
        self.interaction.drag_enabled
    }

    /// Abandons every in‑progress gesture and pending frame update.
    pub fn cancel_gestures(&mut self) {
        self.frame.cancel();
        self.interaction.reset();
        self.update_cursor();
    }

    fn update_cursor(&mut self) {
        let cursor = self.interaction.cursor(&self.config);
        self.surface.set_cursor(cursor);
    }

    fn zoom_speed(&self, base: f64) -> f64 {
        if self.config.enable_adaptive_speed {
            adaptive_zoom_speed(base, self.canvas_size())
        } else {
            base
        }
    }
}

fn initial_transform(config: &ViewportConfig) -> Transform {
    Transform::new(
        config.limits().clamp(config.initial_zoom.unwrap_or(1.0)),
        config.initial_pan.unwrap_or(Vec2::ZERO),
    )
}

impl<S: Surface> Execute for Viewport<S> {
    fn execute(&mut self, command: Command) -> Result<bool, CommandError> {
        command.validate()?;
        log::debug!("{:?}: {command:?}", self.name());
        let changed = match command {
            Command::ZoomIn { factor } => self.zoom_in(factor.unwrap_or(DEFAULT_ZOOM_FACTOR)),
            Command::ZoomOut { factor } => self.zoom_out(factor.unwrap_or(DEFAULT_ZOOM_FACTOR)),
            Command::SetZoom { level } => self.set_zoom(level),
            Command::ResetZoom => self.reset_zoom(),
            Command::PanLeft { distance } => self.pan_left(distance),
            Command::PanRight { distance } => self.pan_right(distance),
            Command::PanUp { distance } => self.pan_up(distance),
            Command::PanDown { distance } => self.pan_down(distance),
            Command::PanToPoint { x, y } => self.pan_to_point(Point::new(x, y)),
            Command::FitToScreen => self.fit_to_screen(),
            Command::CenterContent => self.center_content(),
            Command::ResetView => self.reset_view(),
            Command::ResetViewToCenter => self.reset_view_to_center(),
            Command::ResetToInitial => self.reset_to_initial(),
            Command::ShowRulers => self.show_rulers(),
            Command::HideRulers => self.hide_rulers(),
            Command::ToggleRulers => self.toggle_rulers(),
            Command::ShowGrid => self.show_grid(),
            Command::HideGrid => self.hide_grid(),
            Command::ToggleGrid => self.toggle_grid(),
            Command::SetTransitions { enabled } => self.set_transitions_enabled(enabled),
            Command::ToggleTransitions => {
                self.toggle_transitions();
                true
            }
        };
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};
    use vista_view::Transform;

    use super::Viewport;
    use crate::config::{ConfigError, ViewportConfig};
    use crate::surface::Surface;

    #[derive(Debug)]
    struct Fixed(Size);

    impl Surface for Fixed {
        fn viewport_size(&self) -> Size {
            self.0
        }

        fn apply_transform(&mut self, _: &Transform) {}
    }

    fn viewport(rulers: bool) -> Viewport<Fixed> {
        let config = ViewportConfig {
            enable_rulers: rulers,
            ..ViewportConfig::default()
        };
        Viewport::new(Fixed(Size::new(800.0, 600.0)), config).unwrap()
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = ViewportConfig {
            zoom_speed: 0.0,
            ..ViewportConfig::default()
        };
        let err = Viewport::new(Fixed(Size::new(1.0, 1.0)), config).unwrap_err();
        assert_eq!(err, ConfigError::ZoomSpeed(0.0));
    }

    #[test]
    fn canvas_excludes_ruler_band() {
        let mut v = viewport(true);
        assert_eq!(v.canvas_size(), Size::new(780.0, 580.0));
        assert_eq!(v.to_canvas(Point::new(20.0, 20.0)), Point::ORIGIN);
        v.hide_rulers();
        assert_eq!(v.canvas_size(), Size::new(800.0, 600.0));
        assert_eq!(v.to_canvas(Point::new(20.0, 20.0)), Point::new(20.0, 20.0));
    }

    #[test]
    fn initial_view_is_clamped() {
        let config = ViewportConfig {
            initial_zoom: Some(500.0),
            initial_pan: Some(Vec2::new(5.0, 6.0)),
            ..ViewportConfig::default()
        };
        let v = Viewport::new(Fixed(Size::new(800.0, 600.0)), config).unwrap();
        assert_eq!(v.transform(), Transform::new(80.0, Vec2::new(5.0, 6.0)));
    }

    #[test]
    fn set_config_clamps_scale_around_center() {
        let mut v = viewport(false);
        v.set_zoom(4.0);
        let center = v.canvas_center();
        let anchor = v.canvas_to_content(center);
        v.set_config(ViewportConfig {
            enable_rulers: false,
            max_zoom: 2.0,
            ..ViewportConfig::default()
        })
        .unwrap();
        assert_eq!(v.transform().scale, 2.0);
        let after = v.canvas_to_content(center);
        assert!((after - anchor).hypot() < 1e-9);
    }

    #[test]
    fn update_transform_clamps_and_rejects_garbage() {
        let mut v = viewport(false);
        assert!(v.update_transform(Transform::new(0.001, Vec2::new(3.0, 4.0))));
        assert_eq!(v.transform(), Transform::new(0.05, Vec2::new(3.0, 4.0)));
        assert!(!v.update_transform(Transform::new(1.0, Vec2::new(f64::NAN, 0.0))));
        assert_eq!(v.transform().translate, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn unchanged_operations_report_false() {
        let mut v = viewport(false);
        assert!(!v.reset_view());
        assert!(!v.set_zoom(1.0));
        assert!(v.set_zoom(2.0));
        assert!(!v.set_zoom(2.0));
    }
}
