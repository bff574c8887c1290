//! Errors raised by pixel surface operations.

use thiserror::Error;

/// Errors that can occur while manipulating a [`PixelSurface`](super::PixelSurface).
///
/// Empty undo/redo is deliberately absent: popping an empty history is a no-op.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Failed to allocate {width}x{height} pixel buffer: {source}")]
    AllocationFailure {
        width: i32,
        height: i32,
        #[source]
        source: cairo::Error,
    },

    #[error("Cairo drawing error: {0}")]
    Draw(#[from] cairo::Error),

    #[error("Pixel buffer is borrowed elsewhere: {0}")]
    Borrow(#[from] cairo::BorrowError),

    #[error("Failed to encode image: {0}")]
    Encode(#[source] cairo::IoError),

    #[error("Failed to decode image: {0}")]
    Decode(#[source] cairo::IoError),

    #[error("A gesture is in progress; finish it before exporting")]
    GestureInProgress,
}
