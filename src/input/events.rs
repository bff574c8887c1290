//! Generic pointer event types for cross-host compatibility.

use crate::util::Point;
use serde::{Deserialize, Serialize};

/// Raw pointer events delivered by the host.
///
/// Hosts map their native mouse/touch events onto these; only the primary button draws.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerEvent {
    /// Primary button pressed at a position
    Down(Point),
    /// Pointer moved (button state is not reported; the router tracks it)
    Move(Point),
    /// Primary button released at a position
    Up(Point),
    /// Pointer left the drawable region
    Leave,
}

/// What a pointer event did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerOutcome {
    /// Event arrived outside a gesture (or failed to draw) and changed nothing
    Ignored,
    /// A drag gesture began
    Started,
    /// The active gesture painted or redrew its preview
    Updated,
    /// A gesture or text stamp was finalized and recorded in history
    Committed,
    /// The text tool is waiting for [`submit_text`](super::BoardState::submit_text)
    TextRequested,
    /// A pending text prompt was dismissed without stamping
    Cancelled,
}
