//! Raster drawing engine: a pixel surface, interchangeable drawing tools, a gesture
//! state machine and snapshot undo/redo.
//!
//! Hosts feed pointer events and toolbar state into [`input::BoardState`]; the CLI
//! replays the same events from [`script`] files.

pub mod config;
pub mod draw;
pub mod export;
pub mod history;
pub mod input;
pub mod script;
pub mod util;

pub use config::Config;
