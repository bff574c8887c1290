//! Snapshot-based undo/redo.

use crate::draw::{PixelSurface, Snapshot, SurfaceError};

/// Two stacks of full-frame snapshots.
///
/// Depth is bounded only by available memory. Any [`push`](Self::push) empties the
/// redo list, so redo is only possible directly after an undo.
#[derive(Debug, Default)]
pub struct HistoryStack {
    undo: Vec<Snapshot>,
    redo: Vec<Snapshot>,
}

impl HistoryStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a state to return to and invalidates the redo list.
    pub fn push(&mut self, snapshot: Snapshot) {
        self.undo.push(snapshot);
        self.redo.clear();
    }

    /// Restores the most recent undo state, parking the current surface on the redo list.
    ///
    /// Returns `Ok(false)` without touching anything when there is nothing to undo. If the
    /// current state cannot be captured the stacks and surface are left unchanged.
    pub fn undo(&mut self, surface: &mut PixelSurface) -> Result<bool, SurfaceError> {
        Self::step(&mut self.undo, &mut self.redo, surface)
    }

    /// Mirror of [`undo`](Self::undo): restores the most recent redo state.
    pub fn redo(&mut self, surface: &mut PixelSurface) -> Result<bool, SurfaceError> {
        Self::step(&mut self.redo, &mut self.undo, surface)
    }

    fn step(
        from: &mut Vec<Snapshot>,
        to: &mut Vec<Snapshot>,
        surface: &mut PixelSurface,
    ) -> Result<bool, SurfaceError> {
        let Some(target) = from.last() else {
            return Ok(false);
        };

        let current = surface.snapshot()?;
        surface.restore(target)?;
        from.pop();
        to.push(current);
        Ok(true)
    }

    /// Empties both stacks and clears the surface.
    pub fn reset(&mut self, surface: &mut PixelSurface) -> Result<(), SurfaceError> {
        self.clear();
        surface.clear()
    }

    /// Empties both stacks without touching the surface.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }
}
