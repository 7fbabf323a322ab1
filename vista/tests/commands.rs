// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Commands routed through a `Registry` of live viewports.

use kurbo::{Point, Size, Vec2};
use vista::{
    Command, CommandError, DispatchError, Execute, Registry, Request, Surface, Transform,
    Viewport, ViewportConfig,
};

#[derive(Debug)]
struct Screen(Size);

impl Surface for Screen {
    fn viewport_size(&self) -> Size {
        self.0
    }

    fn apply_transform(&mut self, _: &Transform) {}
}

fn named(name: &str) -> Viewport<Screen> {
    let config = ViewportConfig {
        name: Some(name.into()),
        enable_rulers: false,
        ..ViewportConfig::default()
    };
    Viewport::new(Screen(Size::new(800.0, 600.0)), config).unwrap()
}

fn registry() -> Registry<Viewport<Screen>> {
    let mut reg = Registry::new();
    for name in ["main", "minimap"] {
        let v = named(name);
        reg.register(v.name().to_owned(), v);
    }
    reg
}

#[test]
fn dispatch_reaches_only_the_named_viewport() {
    let mut reg = registry();
    let changed = reg.dispatch(&Request::new("main", Command::SetZoom { level: 2.0 }));
    assert_eq!(changed, Ok(true));
    assert_eq!(reg.get("main").unwrap().transform().scale, 2.0);
    assert_eq!(reg.get("minimap").unwrap().transform(), Transform::IDENTITY);
}

#[test]
fn unchanged_command_reports_false() {
    let mut reg = registry();
    assert_eq!(
        reg.dispatch(&Request::new("main", Command::ResetView)),
        Ok(false)
    );
}

#[test]
fn bad_payload_is_rejected_before_acting() {
    let mut reg = registry();
    let err = reg
        .dispatch(&Request::new("main", Command::SetZoom { level: -2.0 }))
        .unwrap_err();
    assert_eq!(err, DispatchError::Command(CommandError::InvalidZoomLevel(-2.0)));
    assert_eq!(reg.get("main").unwrap().transform(), Transform::IDENTITY);
}

#[test]
fn unregistered_viewport_is_unknown() {
    let mut reg = registry();
    let removed = reg.unregister("minimap").unwrap();
    assert_eq!(removed.name(), "minimap");
    assert_eq!(
        reg.dispatch(&Request::new("minimap", Command::FitToScreen)),
        Err(DispatchError::UnknownInstance("minimap".into()))
    );
}

#[test]
fn execute_covers_navigation_commands() {
    let mut v = named("main");
    assert_eq!(v.execute(Command::ZoomIn { factor: None }), Ok(true));
    assert!((v.transform().scale - 1.5).abs() < 1e-9);
    v.execute(Command::ZoomOut { factor: Some(0.5) }).unwrap();
    assert!((v.transform().scale - 1.0).abs() < 1e-9);

    v.execute(Command::ResetView).unwrap();
    v.execute(Command::PanLeft { distance: None }).unwrap();
    v.execute(Command::PanDown { distance: Some(5.0) }).unwrap();
    assert_eq!(v.transform().translate, Vec2::new(50.0, -5.0));

    v.execute(Command::PanToPoint { x: 400.0, y: 300.0 }).unwrap();
    assert_eq!(v.canvas_to_content(v.canvas_center()), Point::new(400.0, 300.0));

    v.execute(Command::FitToScreen).unwrap();
    assert!(v.transform().scale < 0.1);
    v.execute(Command::ResetZoom).unwrap();
    assert!((v.transform().scale - 1.0).abs() < 1e-9);
    v.execute(Command::ResetToInitial).unwrap();
    assert_eq!(v.transform(), Transform::IDENTITY);
}

#[test]
fn execute_covers_toggles() {
    let mut v = named("main");
    assert_eq!(v.execute(Command::ShowRulers), Ok(true));
    assert_eq!(v.execute(Command::ShowRulers), Ok(false));
    assert_eq!(v.execute(Command::ToggleRulers), Ok(true));
    assert!(!v.rulers_visible());

    v.execute(Command::ShowGrid).unwrap();
    assert!(v.grid_visible());
    v.execute(Command::HideGrid).unwrap();
    v.execute(Command::ToggleGrid).unwrap();
    assert!(v.grid_visible());

    assert_eq!(v.execute(Command::SetTransitions { enabled: false }), Ok(true));
    v.execute(Command::ToggleTransitions).unwrap();
    assert!(v.transitions_enabled());
}

#[cfg(feature = "serde")]
#[test]
fn json_request_drives_a_viewport() {
    let mut reg = registry();
    let request: Request = serde_json::from_str(
        r#"{ "source": "vista", "canvasName": "main", "command": { "kind": "panToPoint", "x": 1000, "y": 1000 } }"#,
    )
    .unwrap();
    assert_eq!(reg.dispatch(&request), Ok(true));
    assert_eq!(
        reg.get("main").unwrap().transform().translate,
        Vec2::new(-600.0, -700.0)
    );
}
