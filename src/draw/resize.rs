//! Resize-preserving content rebinding.
//!
//! When the drawable area changes size the buffer is reallocated and the previous
//! content is stretched to exactly fill the new dimensions. Aspect ratio is not kept.

use super::error::SurfaceError;
use super::surface::allocate_buffer;

/// Paints `source` scaled to cover all of `target`.
///
/// With [`cairo::Operator::Source`] the target is replaced outright; with
/// [`cairo::Operator::Over`] the source is composited on top. An empty source clears
/// the target when replacing and is ignored otherwise.
pub(crate) fn stretch_onto(
    target: &cairo::ImageSurface,
    source: &cairo::ImageSurface,
    operator: cairo::Operator,
) -> Result<(), SurfaceError> {
    let (target_w, target_h) = (target.width(), target.height());
    if target_w <= 0 || target_h <= 0 {
        return Ok(());
    }

    let ctx = cairo::Context::new(target)?;
    let (source_w, source_h) = (source.width(), source.height());
    if source_w <= 0 || source_h <= 0 {
        if operator == cairo::Operator::Source {
            ctx.set_operator(cairo::Operator::Clear);
            ctx.paint()?;
        }
        return Ok(());
    }

    ctx.set_operator(operator);
    ctx.scale(
        target_w as f64 / source_w as f64,
        target_h as f64 / source_h as f64,
    );
    ctx.set_source_surface(source, 0.0, 0.0)?;
    // Repeat edge pixels so scaled borders don't fade toward transparent
    ctx.source().set_extend(cairo::Extend::Pad);
    ctx.paint()?;
    Ok(())
}

/// Allocates a `width` x `height` buffer holding `current` stretched to fit.
///
/// `current` is left untouched, so a failed allocation leaves the caller's surface as it was.
pub(crate) fn rebind(
    current: &cairo::ImageSurface,
    width: i32,
    height: i32,
) -> Result<cairo::ImageSurface, SurfaceError> {
    let resized = allocate_buffer(width, height)?;
    stretch_onto(&resized, current, cairo::Operator::Source)?;
    log::debug!(
        "Rebound surface {}x{} -> {}x{}",
        current.width(),
        current.height(),
        width,
        height
    );
    Ok(resized)
}
