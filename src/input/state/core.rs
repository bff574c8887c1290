//! Drawing state machine and board state management.

use crate::draw::{
    ExternalImage, FontDescriptor, ImageFormat, PaintState, PixelSurface, Snapshot, SurfaceError,
};
use crate::history::HistoryStack;
use crate::input::{strategy::ToolStrategy, tool::Tool};
use crate::util::Point;

/// One continuous pointer-down-to-up interaction with a drag tool.
#[derive(Debug, Clone)]
pub struct Gesture {
    /// Tool chosen when the pointer went down
    pub tool: Tool,
    /// Where the pointer went down
    pub start: Point,
    /// Latest pointer position
    pub current: Point,
    /// Surface contents when the pointer went down
    pub before: Snapshot,
}

/// Current drawing mode state machine.
///
/// Tracks whether the board is idle, in the middle of a drag gesture, or suspended
/// waiting for the caller to supply text for the text tool.
#[derive(Debug)]
pub enum DrawingState {
    /// Not actively drawing - waiting for pointer down
    Idle,
    /// Actively drawing (primary button held)
    Drawing {
        /// Gesture bookkeeping
        gesture: Gesture,
        /// The tool's handling of this gesture
        strategy: Box<dyn ToolStrategy>,
    },
    /// Text tool pressed; waiting for the caller's prompt to finish
    AwaitingText {
        /// Baseline anchor for the stamp
        anchor: Point,
        /// Paint state captured at the press
        paint: PaintState,
        /// Surface contents at the press, restored if stamping fails
        before: Snapshot,
    },
}

/// The drawing board: one pixel surface, its history, and the gesture router.
///
/// Hosts feed pointer events and toolbar state in; callers drive undo/redo/reset,
/// resizing, image import and export. Everything runs on the caller's thread.
#[derive(Debug)]
pub struct BoardState {
    pub(crate) surface: PixelSurface,
    pub(crate) history: HistoryStack,
    /// Current drawing mode state machine
    pub state: DrawingState,
    /// Set whenever the surface changes; hosts clear it after presenting a frame
    pub needs_redraw: bool,
}

impl BoardState {
    /// Creates an empty board with a transparent surface and no history.
    pub fn new(width: i32, height: i32) -> Result<Self, SurfaceError> {
        Ok(Self {
            surface: PixelSurface::new(width, height)?,
            history: HistoryStack::new(),
            state: DrawingState::Idle,
            needs_redraw: true,
        })
    }

    /// Creates a board whose text tool uses the given font.
    pub fn with_font(width: i32, height: i32, font: FontDescriptor) -> Result<Self, SurfaceError> {
        let mut board = Self::new(width, height)?;
        board.surface.set_font(font);
        Ok(board)
    }

    pub fn surface(&self) -> &PixelSurface {
        &self.surface
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    /// Returns true when no gesture or text prompt is pending.
    pub fn is_idle(&self) -> bool {
        matches!(self.state, DrawingState::Idle)
    }

    /// Returns the tool of the active gesture, if any.
    pub fn active_tool(&self) -> Option<Tool> {
        match &self.state {
            DrawingState::Drawing { gesture, .. } => Some(gesture.tool),
            DrawingState::AwaitingText { .. } => Some(Tool::Text),
            DrawingState::Idle => None,
        }
    }

    /// Abandons any active gesture without recording history.
    ///
    /// Shape previews are removed; freehand pixels already painted stay. A pending text
    /// prompt is dropped.
    pub fn cancel_gesture(&mut self) {
        match std::mem::replace(&mut self.state, DrawingState::Idle) {
            DrawingState::Drawing {
                gesture,
                mut strategy,
            } => {
                if let Err(err) = strategy.cancel(&mut self.surface) {
                    log::warn!("Failed to cancel {} gesture cleanly: {}", gesture.tool, err);
                }
                log::debug!("Cancelled {} gesture", gesture.tool);
                self.needs_redraw = true;
            }
            DrawingState::AwaitingText { .. } => {
                log::debug!("Dropped pending text prompt");
            }
            DrawingState::Idle => {}
        }
    }

    /// Steps back one history entry. No-op when there is nothing to undo.
    ///
    /// Any active gesture is cancelled first.
    pub fn undo(&mut self) -> Result<bool, SurfaceError> {
        self.cancel_gesture();
        let changed = self.history.undo(&mut self.surface)?;
        self.needs_redraw |= changed;
        Ok(changed)
    }

    /// Re-applies the most recently undone entry. No-op when the redo list is empty.
    pub fn redo(&mut self) -> Result<bool, SurfaceError> {
        self.cancel_gesture();
        let changed = self.history.redo(&mut self.surface)?;
        self.needs_redraw |= changed;
        Ok(changed)
    }

    /// Clears the surface and both history stacks.
    pub fn reset(&mut self) -> Result<(), SurfaceError> {
        self.cancel_gesture();
        self.history.reset(&mut self.surface)?;
        self.needs_redraw = true;
        log::info!("Board reset");
        Ok(())
    }

    /// Rebinds the surface to new dimensions, stretching existing content to fill.
    ///
    /// An active gesture is cancelled before the buffer changes size, so no preview is
    /// ever restored from a snapshot taken at the old dimensions.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<(), SurfaceError> {
        if width == self.surface.width() && height == self.surface.height() {
            return Ok(());
        }
        self.cancel_gesture();
        self.surface.resize(width, height)?;
        self.needs_redraw = true;
        Ok(())
    }

    /// Ingests an externally supplied image, stretched to the surface.
    ///
    /// With `discard_history` both stacks and the surface are cleared first, so the image
    /// becomes the new base. Either way the resulting surface is pushed as a new history
    /// entry and the redo list is emptied.
    pub fn load_external_image(
        &mut self,
        image: &ExternalImage,
        discard_history: bool,
    ) -> Result<(), SurfaceError> {
        self.cancel_gesture();

        if discard_history {
            self.history.reset(&mut self.surface)?;
        }
        self.surface.draw_image(image)?;
        self.needs_redraw = true;
        self.history.push(self.surface.snapshot()?);

        log::info!(
            "Loaded {}x{} image (discard history: {})",
            image.width(),
            image.height(),
            discard_history
        );
        Ok(())
    }

    /// Encodes the surface for download or persistence.
    ///
    /// Refuses while a gesture or text prompt is pending, so a half-drawn preview is
    /// never exported.
    pub fn encode(&self, format: ImageFormat) -> Result<Vec<u8>, SurfaceError> {
        if !self.is_idle() {
            return Err(SurfaceError::GestureInProgress);
        }
        self.surface.encode(format)
    }

    /// Records the surface as it stands after a finished edit.
    ///
    /// A failed capture leaves history untouched; the pixels stay drawn.
    pub(super) fn commit(&mut self) {
        self.needs_redraw = true;
        match self.surface.snapshot() {
            Ok(snapshot) => self.history.push(snapshot),
            Err(err) => log::warn!("Edit not recorded in history: {}", err),
        }
    }
}
