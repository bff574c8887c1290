//! Raster drawing primitives (Cairo-based).
//!
//! This module defines the pixel-level side of the board:
//! - [`PixelSurface`]: the single mutable ARGB32 buffer and its compositing primitives
//! - [`PaintState`]: per-draw settings (color, width, alpha, cap, compositing mode)
//! - [`Outline`]: stroke geometry for the shape tools
//! - [`Snapshot`]: immutable captured copies used by undo/redo and shape previews

pub mod color;
pub mod error;
pub mod font;
pub mod paint;
pub mod resize;
pub mod shape;
pub mod surface;

// Re-export commonly used types at module level
pub use color::Color;
pub use error::SurfaceError;
pub use font::FontDescriptor;
pub use paint::{CompositeMode, LineCap, PaintState};
pub use shape::Outline;
pub use surface::{ExternalImage, ImageFormat, PixelSurface, Snapshot};

pub use color::{
    AMBER, BLACK, INDIGO, PALETTE, PINK, PURPLE, ROSE, SLATE, TEAL, TRANSPARENT, WHITE,
};
