//! Replayable gesture scripts.
//!
//! A script is a JSON document listing toolbar changes, pointer events and board commands
//! in the order a host would deliver them:
//!
//! ```json
//! {
//!   "steps": [
//!     { "op": "select", "tool": "rectangle", "color": "teal", "size": 6 },
//!     { "op": "down", "x": 20, "y": 20 },
//!     { "op": "move", "x": 180, "y": 120 },
//!     { "op": "up", "x": 180, "y": 120 },
//!     { "op": "undo" }
//!   ]
//! }
//! ```

use crate::draw::{ExternalImage, LineCap};
use crate::input::{BoardState, PointerEvent, PointerOutcome, Tool, ToolSelection};
use crate::util::{Point, parse_color};
use anyhow::{Context, Result, anyhow};
use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// One scripted action.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    /// Changes toolbar fields; omitted fields keep their current value
    Select {
        #[serde(default)]
        tool: Option<Tool>,
        /// Palette name or hex code
        #[serde(default)]
        color: Option<String>,
        #[serde(default)]
        size: Option<f64>,
        #[serde(default)]
        opacity: Option<f64>,
        #[serde(default)]
        brush_cap: Option<LineCap>,
    },
    Down {
        x: f64,
        y: f64,
    },
    Move {
        x: f64,
        y: f64,
    },
    Up {
        x: f64,
        y: f64,
    },
    Leave,
    /// Answers a pending text prompt; `null` dismisses it
    Text {
        #[serde(default)]
        text: Option<String>,
    },
    Undo,
    Redo,
    Reset,
    Resize {
        width: i32,
        height: i32,
    },
    /// Loads a PNG, relative paths resolved against the script's directory
    Load {
        path: PathBuf,
        #[serde(default)]
        discard_history: bool,
    },
}

/// A parsed gesture script.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Script {
    pub steps: Vec<Step>,
}

impl Script {
    /// Parses a script from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse gesture script")
    }

    /// Reads and parses a script file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Invalid script {}", path.display()))
    }
}

/// Counts of what a replay did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub steps: usize,
    pub committed: usize,
}

/// Replays `script` against `board`, mutating `selection` on `select` steps.
///
/// Pointer events never fail; board commands and image loads propagate their errors
/// with the offending step number attached.
pub fn run(
    board: &mut BoardState,
    selection: &mut ToolSelection,
    script: &Script,
    base_dir: &Path,
) -> Result<ReplaySummary> {
    let mut summary = ReplaySummary::default();

    for (index, step) in script.steps.iter().enumerate() {
        let outcome = apply(board, selection, step, base_dir)
            .with_context(|| format!("Script step {} ({:?}) failed", index + 1, step))?;
        if outcome == Some(PointerOutcome::Committed) {
            summary.committed += 1;
        }
        summary.steps += 1;
    }

    info!(
        "Replayed {} steps ({} edits committed)",
        summary.steps, summary.committed
    );
    Ok(summary)
}

fn apply(
    board: &mut BoardState,
    selection: &mut ToolSelection,
    step: &Step,
    base_dir: &Path,
) -> Result<Option<PointerOutcome>> {
    let outcome = match step {
        Step::Select {
            tool,
            color,
            size,
            opacity,
            brush_cap,
        } => {
            if let Some(tool) = tool {
                selection.tool = *tool;
            }
            if let Some(color) = color {
                selection.color =
                    parse_color(color).ok_or_else(|| anyhow!("unknown color '{color}'"))?;
            }
            // Same ranges the toolbar sliders allow
            if let Some(size) = size {
                selection.size = size.clamp(1.0, 50.0);
            }
            if let Some(opacity) = opacity {
                selection.opacity = opacity.clamp(0.1, 1.0);
            }
            if let Some(cap) = brush_cap {
                selection.brush_cap = *cap;
            }
            debug!("Selection now {:?}", selection);
            return Ok(None);
        }
        Step::Down { x, y } => {
            board.handle_pointer(PointerEvent::Down(Point::new(*x, *y)), selection)
        }
        Step::Move { x, y } => {
            board.handle_pointer(PointerEvent::Move(Point::new(*x, *y)), selection)
        }
        Step::Up { x, y } => board.handle_pointer(PointerEvent::Up(Point::new(*x, *y)), selection),
        Step::Leave => board.handle_pointer(PointerEvent::Leave, selection),
        Step::Text { text } => board.submit_text(text.as_deref()),
        Step::Undo => {
            board.undo()?;
            return Ok(None);
        }
        Step::Redo => {
            board.redo()?;
            return Ok(None);
        }
        Step::Reset => {
            board.reset()?;
            return Ok(None);
        }
        Step::Resize { width, height } => {
            board.resize(*width, *height)?;
            return Ok(None);
        }
        Step::Load {
            path,
            discard_history,
        } => {
            let path = base_dir.join(path);
            let bytes = fs::read(&path)
                .with_context(|| format!("Failed to read image {}", path.display()))?;
            let image = ExternalImage::from_png(&bytes)?;
            board.load_external_image(&image, *discard_history)?;
            return Ok(None);
        }
    };

    Ok(Some(outcome))
}
