//! Drawing tool selection.

use crate::draw::{Color, LineCap, PaintState, SLATE};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Drawing tool ids, in toolbar order.
///
/// The active tool determines what a pointer gesture does to the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Freehand drawing - follows the pointer path (default)
    #[default]
    Brush,
    /// Freehand erasing - clears pixels under the pointer path
    Eraser,
    /// Straight line from press point to pointer
    Line,
    /// Rectangle outline from corner to corner
    Rectangle,
    /// Circle outline centered on the press point
    Circle,
    /// Five-spike star centered on the press point
    Star,
    /// Single-shot text stamp at the press point
    Text,
}

impl Tool {
    pub const ALL: [Tool; 7] = [
        Tool::Brush,
        Tool::Eraser,
        Tool::Line,
        Tool::Rectangle,
        Tool::Circle,
        Tool::Star,
        Tool::Text,
    ];

    /// Stable lowercase id, as used in config files and scripts.
    pub fn id(self) -> &'static str {
        match self {
            Tool::Brush => "brush",
            Tool::Eraser => "eraser",
            Tool::Line => "line",
            Tool::Rectangle => "rectangle",
            Tool::Circle => "circle",
            Tool::Star => "star",
            Tool::Text => "text",
        }
    }
}

impl FromStr for Tool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().to_lowercase();
        Tool::ALL
            .into_iter()
            .find(|tool| tool.id() == id)
            .ok_or_else(|| format!("unknown tool '{id}'"))
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// The toolbar state the board reads on every gesture step.
///
/// Owned by the caller; the board never modifies it. Values are trusted as given
/// (size 1-50, opacity 0.1-1.0 by toolbar contract) and not re-validated here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolSelection {
    /// Active tool
    pub tool: Tool,
    /// Pen color
    pub color: Color,
    /// Line width in pixels
    pub size: f64,
    /// Global opacity
    pub opacity: f64,
    /// Stroke end style ("brush type")
    pub brush_cap: LineCap,
}

impl ToolSelection {
    /// Paint state for drawing with this selection.
    pub fn paint_state(&self) -> PaintState {
        PaintState::solid(self.color, self.size, self.opacity, self.brush_cap)
    }
}

impl Default for ToolSelection {
    fn default() -> Self {
        Self {
            tool: Tool::Brush,
            color: SLATE,
            size: 5.0,
            opacity: 1.0,
            brush_cap: LineCap::Round,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_from_str() {
        for tool in Tool::ALL {
            assert_eq!(tool.id().parse::<Tool>(), Ok(tool));
        }
        assert_eq!("Rectangle".parse::<Tool>(), Ok(Tool::Rectangle));
        assert!("lasso".parse::<Tool>().is_err());
    }

    #[test]
    fn selection_maps_onto_paint_state() {
        let selection = ToolSelection {
            size: 12.0,
            opacity: 0.4,
            brush_cap: LineCap::Square,
            ..ToolSelection::default()
        };
        let paint = selection.paint_state();
        assert_eq!(paint.line_width, 12.0);
        assert_eq!(paint.alpha, 0.4);
        assert_eq!(paint.line_cap, LineCap::Square);
        assert_eq!(paint.stroke_color, paint.fill_color);
    }
}
