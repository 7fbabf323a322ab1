// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Programmatic commands.
//!
//! [`Command`] is the closed set of operations a remote caller (toolbar,
//! embedding page, script) can ask a viewport to perform. With the `serde`
//! feature, commands use an internally tagged form:
//!
//! ```json
//! { "kind": "setZoom", "level": 2.0 }
//! ```

use alloc::string::String;
use core::fmt;

/// A viewport operation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")
)]
pub enum Command {
    /// Zoom in around the canvas center by `1 + factor` (default `0.5`).
    ZoomIn {
        /// Relative step.
        #[cfg_attr(feature = "serde", serde(default))]
        factor: Option<f64>,
    },
    /// Zoom out around the canvas center by `1 + factor` (default `0.5`).
    ZoomOut {
        /// Relative step.
        #[cfg_attr(feature = "serde", serde(default))]
        factor: Option<f64>,
    },
    /// Set the scale around the canvas center.
    SetZoom {
        /// Target scale; must be positive.
        level: f64,
    },
    /// Scale 1 around the canvas center.
    ResetZoom,
    /// Pan the view left.
    PanLeft {
        /// Pixels; the keyboard pan step when unset.
        #[cfg_attr(feature = "serde", serde(default))]
        distance: Option<f64>,
    },
    /// Pan the view right.
    PanRight {
        /// Pixels; the keyboard pan step when unset.
        #[cfg_attr(feature = "serde", serde(default))]
        distance: Option<f64>,
    },
    /// Pan the view up.
    PanUp {
        /// Pixels; the keyboard pan step when unset.
        #[cfg_attr(feature = "serde", serde(default))]
        distance: Option<f64>,
    },
    /// Pan the view down.
    PanDown {
        /// Pixels; the keyboard pan step when unset.
        #[cfg_attr(feature = "serde", serde(default))]
        distance: Option<f64>,
    },
    /// Center the canvas on a content point.
    PanToPoint {
        /// Content x.
        x: f64,
        /// Content y.
        y: f64,
    },
    /// Fit the whole content into the canvas.
    FitToScreen,
    /// Center the content at the current scale.
    CenterContent,
    /// Scale 1 with the content origin at the canvas origin.
    ResetView,
    /// Scale 1 around the canvas center.
    ResetViewToCenter,
    /// Back to the configured initial zoom and pan.
    ResetToInitial,
    /// Show the rulers.
    ShowRulers,
    /// Hide the rulers.
    HideRulers,
    /// Flip ruler visibility.
    ToggleRulers,
    /// Show the grid.
    ShowGrid,
    /// Hide the grid.
    HideGrid,
    /// Flip grid visibility.
    ToggleGrid,
    /// Turn transitions on or off.
    SetTransitions {
        /// New state.
        enabled: bool,
    },
    /// Flip transitions.
    ToggleTransitions,
}

impl Command {
    /// Rejects payloads no viewport could act on.
    pub fn validate(&self) -> Result<(), CommandError> {
        let check = |value: f64| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(CommandError::InvalidAmount(value))
            }
        };
        match *self {
            Self::SetZoom { level } => {
                if level.is_finite() && level > 0.0 {
                    Ok(())
                } else {
                    Err(CommandError::InvalidZoomLevel(level))
                }
            }
            Self::ZoomIn { factor: Some(v) } | Self::ZoomOut { factor: Some(v) } => check(v),
            Self::PanLeft { distance: Some(v) }
            | Self::PanRight { distance: Some(v) }
            | Self::PanUp { distance: Some(v) }
            | Self::PanDown { distance: Some(v) } => {
                if v.is_finite() {
                    Ok(())
                } else {
                    Err(CommandError::InvalidAmount(v))
                }
            }
            Self::PanToPoint { x, y } => {
                if x.is_finite() && y.is_finite() {
                    Ok(())
                } else {
                    Err(CommandError::InvalidPoint { x, y })
                }
            }
            _ => Ok(()),
        }
    }
}

/// A command payload was rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CommandError {
    /// Zoom level is not a positive finite number.
    InvalidZoomLevel(f64),
    /// Zoom factor or pan distance is unusable.
    InvalidAmount(f64),
    /// Target point is not finite.
    InvalidPoint {
        /// Requested x.
        x: f64,
        /// Requested y.
        y: f64,
    },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidZoomLevel(v) => {
                write!(f, "invalid zoom level: {v}. Must be a positive number")
            }
            Self::InvalidAmount(v) => write!(f, "invalid amount: {v}"),
            Self::InvalidPoint { x, y } => write!(f, "invalid point: ({x}, {y})"),
        }
    }
}

impl core::error::Error for CommandError {}

/// Something that can carry out a [`Command`].
pub trait Execute {
    /// Validates and performs `command`.
    ///
    /// Returns whether anything changed.
    fn execute(&mut self, command: Command) -> Result<bool, CommandError>;
}

/// Source tags a [`Request`] may carry.
pub const ACCEPTED_SOURCES: [&str; 2] = ["vista", "application"];

/// A command addressed to a named viewport.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Request {
    /// Who sent the request; must be one of [`ACCEPTED_SOURCES`].
    pub source: String,
    /// Name of the target viewport.
    pub canvas_name: String,
    /// What to do.
    pub command: Command,
}

impl Request {
    /// Builds an application request.
    #[must_use]
    pub fn new(canvas_name: impl Into<String>, command: Command) -> Self {
        Self {
            source: String::from("application"),
            canvas_name: canvas_name.into(),
            command,
        }
    }

    /// Returns `true` if `source` is accepted.
    #[must_use]
    pub fn has_accepted_source(&self) -> bool {
        ACCEPTED_SOURCES.contains(&self.source.as_str())
    }
}
