//! Paint state applied before every draw call.

use super::color::{Color, SLATE};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stroke end style, selectable from the toolbar as the "brush type".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    /// Rounded ends (default)
    #[default]
    Round,
    /// Square ends extending half the line width past the endpoint
    Square,
    /// Flat ends exactly at the endpoint
    Butt,
}

impl LineCap {
    pub(crate) fn to_cairo(self) -> cairo::LineCap {
        match self {
            LineCap::Round => cairo::LineCap::Round,
            LineCap::Square => cairo::LineCap::Square,
            LineCap::Butt => cairo::LineCap::Butt,
        }
    }
}

impl FromStr for LineCap {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "round" => Ok(LineCap::Round),
            "square" => Ok(LineCap::Square),
            "butt" => Ok(LineCap::Butt),
            other => Err(format!("unknown line cap '{other}'")),
        }
    }
}

impl fmt::Display for LineCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LineCap::Round => "round",
            LineCap::Square => "square",
            LineCap::Butt => "butt",
        };
        f.write_str(name)
    }
}

/// How newly drawn pixels combine with the existing buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompositeMode {
    /// Blend color over existing pixels using alpha
    #[default]
    Normal,
    /// Remove coverage from existing pixels regardless of color
    Erase,
}

impl CompositeMode {
    pub(crate) fn to_cairo(self) -> cairo::Operator {
        match self {
            CompositeMode::Normal => cairo::Operator::Over,
            // dest * (1 - source alpha)
            CompositeMode::Erase => cairo::Operator::DestOut,
        }
    }
}

/// Complete set of per-draw settings.
///
/// Passed by value into [`PixelSurface::apply_paint_state`](super::PixelSurface::apply_paint_state)
/// before every discrete draw, so nothing set by a previous tool can leak into the next stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintState {
    /// Color used for strokes
    pub stroke_color: Color,
    /// Color used for text fills
    pub fill_color: Color,
    /// Line width in pixels
    pub line_width: f64,
    /// Global opacity multiplier (0.0 - 1.0)
    pub alpha: f64,
    /// Stroke end style
    pub line_cap: LineCap,
    /// Compositing mode
    pub mode: CompositeMode,
}

impl PaintState {
    /// Paint state for a single color; stroke and fill share it.
    pub fn solid(color: Color, line_width: f64, alpha: f64, line_cap: LineCap) -> Self {
        Self {
            stroke_color: color,
            fill_color: color,
            line_width,
            alpha,
            line_cap,
            mode: CompositeMode::Normal,
        }
    }

    /// Returns a copy with the given compositing mode.
    pub fn with_mode(mut self, mode: CompositeMode) -> Self {
        self.mode = mode;
        self
    }
}

impl Default for PaintState {
    fn default() -> Self {
        Self::solid(SLATE, 5.0, 1.0, LineCap::Round)
    }
}
