//! Per-tool drawing strategies.
//!
//! Every drag tool consumes a gesture as `begin` / `step`* / `end`. Freehand tools paint
//! straight onto the surface as the pointer moves; shape tools restore the pre-gesture
//! snapshot before each redraw so the surface always shows exactly one preview.

use super::tool::Tool;
use crate::draw::{CompositeMode, Outline, PaintState, PixelSurface, Snapshot, SurfaceError};
use crate::util::Point;
use std::fmt;

/// A drag tool's handling of one gesture.
pub trait ToolStrategy: fmt::Debug {
    /// Pointer pressed at `at`. `before` is the surface as it was when the gesture started.
    fn begin(
        &mut self,
        surface: &mut PixelSurface,
        paint: PaintState,
        at: Point,
        before: &Snapshot,
    ) -> Result<(), SurfaceError>;

    /// Pointer moved to `at` while the gesture is active.
    fn step(
        &mut self,
        surface: &mut PixelSurface,
        paint: PaintState,
        at: Point,
    ) -> Result<(), SurfaceError>;

    /// Gesture finalized; whatever is on the surface now is kept.
    fn end(&mut self, surface: &mut PixelSurface) -> Result<(), SurfaceError>;

    /// Gesture abandoned without finalizing. Shape previews are removed.
    fn cancel(&mut self, surface: &mut PixelSurface) -> Result<(), SurfaceError> {
        self.end(surface)
    }
}

/// Returns the strategy for a drag tool, or `None` for the single-shot text tool.
pub fn for_tool(tool: Tool) -> Option<Box<dyn ToolStrategy>> {
    let strategy: Box<dyn ToolStrategy> = match tool {
        Tool::Brush => Box::new(Freehand::brush()),
        Tool::Eraser => Box::new(Freehand::eraser()),
        Tool::Line => Box::new(ShapePreview::new(Outline::line)),
        Tool::Rectangle => Box::new(ShapePreview::new(Outline::rectangle)),
        Tool::Circle => Box::new(ShapePreview::new(Outline::circle)),
        Tool::Star => Box::new(ShapePreview::new(Outline::star)),
        Tool::Text => return None,
    };
    Some(strategy)
}

/// Brush and eraser: extends an open path and strokes each new segment as it arrives.
#[derive(Debug)]
pub struct Freehand {
    mode: CompositeMode,
    last: Option<Point>,
}

impl Freehand {
    pub fn brush() -> Self {
        Self {
            mode: CompositeMode::Normal,
            last: None,
        }
    }

    /// Brush with erase compositing forced for the duration of the gesture.
    pub fn eraser() -> Self {
        Self {
            mode: CompositeMode::Erase,
            last: None,
        }
    }
}

impl ToolStrategy for Freehand {
    fn begin(
        &mut self,
        surface: &mut PixelSurface,
        paint: PaintState,
        at: Point,
        _before: &Snapshot,
    ) -> Result<(), SurfaceError> {
        surface.apply_paint_state(paint.with_mode(self.mode));
        self.last = Some(at);
        Ok(())
    }

    fn step(
        &mut self,
        surface: &mut PixelSurface,
        paint: PaintState,
        at: Point,
    ) -> Result<(), SurfaceError> {
        let Some(previous) = self.last.replace(at) else {
            return Ok(());
        };
        surface.apply_paint_state(paint.with_mode(self.mode));
        surface.stroke_path(&[previous, at], false)
    }

    fn end(&mut self, surface: &mut PixelSurface) -> Result<(), SurfaceError> {
        self.last = None;
        if self.mode == CompositeMode::Erase {
            let restored = surface.paint_state().with_mode(CompositeMode::Normal);
            surface.apply_paint_state(restored);
        }
        Ok(())
    }
}

/// Line, rectangle, circle and star: redraws the outline for (start, pointer) on every move.
pub struct ShapePreview {
    outline: fn(Point, Point) -> Outline,
    start: Option<Point>,
    before: Option<Snapshot>,
}

impl ShapePreview {
    pub fn new(outline: fn(Point, Point) -> Outline) -> Self {
        Self {
            outline,
            start: None,
            before: None,
        }
    }
}

impl fmt::Debug for ShapePreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShapePreview")
            .field("start", &self.start)
            .field("before", &self.before)
            .finish()
    }
}

impl ToolStrategy for ShapePreview {
    fn begin(
        &mut self,
        _surface: &mut PixelSurface,
        _paint: PaintState,
        at: Point,
        before: &Snapshot,
    ) -> Result<(), SurfaceError> {
        self.start = Some(at);
        self.before = Some(before.clone());
        Ok(())
    }

    fn step(
        &mut self,
        surface: &mut PixelSurface,
        paint: PaintState,
        at: Point,
    ) -> Result<(), SurfaceError> {
        let (Some(start), Some(before)) = (self.start, self.before.as_ref()) else {
            return Ok(());
        };

        surface.restore(before)?;
        surface.apply_paint_state(paint);
        (self.outline)(start, at).stroke(surface)
    }

    fn end(&mut self, _surface: &mut PixelSurface) -> Result<(), SurfaceError> {
        self.start = None;
        self.before = None;
        Ok(())
    }

    fn cancel(&mut self, surface: &mut PixelSurface) -> Result<(), SurfaceError> {
        if let Some(before) = self.before.take() {
            surface.restore(&before)?;
        }
        self.start = None;
        Ok(())
    }
}
