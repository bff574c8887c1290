use crate::input::events::{PointerEvent, PointerOutcome};
use crate::input::strategy;
use crate::input::tool::ToolSelection;
use crate::util::Point;
use log::{debug, warn};

use super::{BoardState, DrawingState, Gesture};

impl BoardState {
    /// Routes a raw pointer event to the matching handler.
    pub fn handle_pointer(
        &mut self,
        event: PointerEvent,
        selection: &ToolSelection,
    ) -> PointerOutcome {
        match event {
            PointerEvent::Down(at) => self.on_pointer_down(selection, at),
            PointerEvent::Move(at) => self.on_pointer_move(selection, at),
            PointerEvent::Up(_) | PointerEvent::Leave => self.on_pointer_up(),
        }
    }

    /// Processes a primary button press.
    ///
    /// # Behavior
    /// - Drag tools: captures the pre-gesture surface and enters `Drawing`
    /// - Text tool: enters `AwaitingText` and returns [`PointerOutcome::TextRequested`];
    ///   the caller resumes with [`submit_text`](Self::submit_text)
    /// - A press while a gesture is already active restarts at the new point; the
    ///   previous gesture is dropped without being recorded
    pub fn on_pointer_down(&mut self, selection: &ToolSelection, at: Point) -> PointerOutcome {
        if !self.is_idle() {
            debug!("Pointer down during active gesture; restarting at {at:?}");
            self.state = DrawingState::Idle;
        }

        let before = match self.surface.snapshot() {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!("Cannot start {} gesture: {}", selection.tool, err);
                return PointerOutcome::Ignored;
            }
        };

        let Some(mut strategy) = strategy::for_tool(selection.tool) else {
            self.state = DrawingState::AwaitingText {
                anchor: at,
                paint: selection.paint_state(),
                before,
            };
            return PointerOutcome::TextRequested;
        };

        let gesture = Gesture {
            tool: selection.tool,
            start: at,
            current: at,
            before,
        };
        if let Err(err) =
            strategy.begin(&mut self.surface, selection.paint_state(), at, &gesture.before)
        {
            warn!("Failed to begin {} gesture: {}", selection.tool, err);
        }

        self.state = DrawingState::Drawing { gesture, strategy };
        debug!("Started {} gesture at {at:?}", selection.tool);
        PointerOutcome::Started
    }

    /// Processes pointer motion.
    ///
    /// Only moves inside an active drag gesture draw anything; stray moves with no
    /// button held (or while text is pending) are ignored.
    pub fn on_pointer_move(&mut self, selection: &ToolSelection, at: Point) -> PointerOutcome {
        let DrawingState::Drawing { gesture, strategy } = &mut self.state else {
            return PointerOutcome::Ignored;
        };

        gesture.current = at;
        if let Err(err) = strategy.step(&mut self.surface, selection.paint_state(), at) {
            warn!("Failed to draw {} step: {}", gesture.tool, err);
            return PointerOutcome::Ignored;
        }

        self.needs_redraw = true;
        PointerOutcome::Updated
    }

    /// Processes a button release or the pointer leaving the surface.
    ///
    /// Leaving mid-gesture counts as a release so the router never stays stuck in
    /// `Drawing`. The finished gesture is recorded in history.
    pub fn on_pointer_up(&mut self) -> PointerOutcome {
        match std::mem::replace(&mut self.state, DrawingState::Idle) {
            DrawingState::Drawing {
                gesture,
                mut strategy,
            } => {
                if let Err(err) = strategy.end(&mut self.surface) {
                    warn!("Failed to finish {} gesture: {}", gesture.tool, err);
                }

                debug!(
                    "Finished {} gesture {:?} -> {:?}",
                    gesture.tool, gesture.start, gesture.current
                );
                self.commit();
                PointerOutcome::Committed
            }
            other => {
                self.state = other;
                PointerOutcome::Ignored
            }
        }
    }

    /// Resumes a text-tool press with the caller's answer.
    ///
    /// `Some` non-empty text is stamped at the press point and recorded in history;
    /// `None` or an empty string dismisses the prompt. Does nothing unless a prompt is
    /// pending.
    pub fn submit_text(&mut self, text: Option<&str>) -> PointerOutcome {
        let (anchor, paint, before) = match std::mem::replace(&mut self.state, DrawingState::Idle)
        {
            DrawingState::AwaitingText {
                anchor,
                paint,
                before,
            } => (anchor, paint, before),
            other => {
                self.state = other;
                return PointerOutcome::Ignored;
            }
        };

        let Some(text) = text.filter(|t| !t.is_empty()) else {
            debug!("Text prompt dismissed");
            return PointerOutcome::Cancelled;
        };

        self.surface.apply_paint_state(paint);
        if let Err(err) = self.surface.fill_text(text, anchor) {
            warn!("Failed to stamp text: {}", err);
            if let Err(err) = self.surface.restore(&before) {
                warn!("Failed to roll back partial text stamp: {}", err);
            }
            return PointerOutcome::Ignored;
        }

        debug!("Stamped {} chars of text at {anchor:?}", text.chars().count());
        self.commit();
        PointerOutcome::Committed
    }

    /// Whether the board is waiting for text from the caller.
    pub fn awaiting_text(&self) -> bool {
        matches!(self.state, DrawingState::AwaitingText { .. })
    }
}
