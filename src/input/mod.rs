//! Pointer handling and the gesture state machine.
//!
//! This module translates host pointer events into drawing on the board. It routes
//! each `Idle -> Drawing -> Idle` gesture to the strategy for the selected tool and
//! suspends in `AwaitingText` while the caller collects text for the text tool.

pub mod events;
pub mod state;
pub mod strategy;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{PointerEvent, PointerOutcome};
pub use state::{BoardState, DrawingState, Gesture};
pub use strategy::ToolStrategy;
pub use tool::{Tool, ToolSelection};
