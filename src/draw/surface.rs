//! The pixel surface: a single ARGB32 buffer plus the paint state used to draw on it.

use super::error::SurfaceError;
use super::font::FontDescriptor;
use super::paint::PaintState;
use super::resize;
use crate::util::Point;
use std::f64::consts::PI;
use std::fmt;
use std::io::Cursor;

/// Portable raster formats the surface can be serialized to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFormat {
    #[default]
    Png,
}

impl ImageFormat {
    pub fn mime_type(self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
        }
    }
}

/// Allocates a cleared ARGB32 buffer, reporting failure as [`SurfaceError::AllocationFailure`].
pub(crate) fn allocate_buffer(width: i32, height: i32) -> Result<cairo::ImageSurface, SurfaceError> {
    cairo::ImageSurface::create(cairo::Format::ARgb32, width.max(0), height.max(0)).map_err(
        |source| SurfaceError::AllocationFailure {
            width,
            height,
            source,
        },
    )
}

/// Immutable copy of the surface contents at one instant.
///
/// Cloning shares the underlying buffer; nothing ever draws into a snapshot after capture.
#[derive(Clone)]
pub struct Snapshot {
    image: cairo::ImageSurface,
}

impl Snapshot {
    pub fn width(&self) -> i32 {
        self.image.width()
    }

    pub fn height(&self) -> i32 {
        self.image.height()
    }

    pub(crate) fn image(&self) -> &cairo::ImageSurface {
        &self.image
    }
}

impl fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Snapshot")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

/// A decoded raster supplied from outside (file import, gallery "edit").
#[derive(Clone)]
pub struct ExternalImage {
    image: cairo::ImageSurface,
}

impl ExternalImage {
    /// Decodes PNG bytes.
    pub fn from_png(bytes: &[u8]) -> Result<Self, SurfaceError> {
        let image = cairo::ImageSurface::create_from_png(&mut Cursor::new(bytes))
            .map_err(SurfaceError::Decode)?;
        Ok(Self { image })
    }

    pub fn width(&self) -> i32 {
        self.image.width()
    }

    pub fn height(&self) -> i32 {
        self.image.height()
    }

    pub(crate) fn image(&self) -> &cairo::ImageSurface {
        &self.image
    }
}

impl fmt::Debug for ExternalImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExternalImage")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

/// The mutable pixel buffer being edited.
///
/// Drawing contexts are created per operation and dropped before returning, so the
/// buffer is never shared while a caller holds the surface.
pub struct PixelSurface {
    buffer: cairo::ImageSurface,
    paint: PaintState,
    font: FontDescriptor,
}

impl PixelSurface {
    /// Creates a fully transparent surface.
    pub fn new(width: i32, height: i32) -> Result<Self, SurfaceError> {
        Ok(Self {
            buffer: allocate_buffer(width, height)?,
            paint: PaintState::default(),
            font: FontDescriptor::default(),
        })
    }

    pub fn width(&self) -> i32 {
        self.buffer.width()
    }

    pub fn height(&self) -> i32 {
        self.buffer.height()
    }

    /// Font used by [`fill_text`](Self::fill_text).
    pub fn font(&self) -> &FontDescriptor {
        &self.font
    }

    pub fn set_font(&mut self, font: FontDescriptor) {
        self.font = font;
    }

    /// The paint state the next draw call will use.
    pub fn paint_state(&self) -> PaintState {
        self.paint
    }

    /// Stores the paint state for subsequent stroke/fill calls.
    pub fn apply_paint_state(&mut self, paint: PaintState) {
        self.paint = paint;
    }

    /// Sets every pixel to fully transparent.
    pub fn clear(&mut self) -> Result<(), SurfaceError> {
        let ctx = cairo::Context::new(&self.buffer)?;
        ctx.set_operator(cairo::Operator::Clear);
        ctx.paint()?;
        Ok(())
    }

    /// Captures the current buffer as an independent copy.
    pub fn snapshot(&self) -> Result<Snapshot, SurfaceError> {
        let image = allocate_buffer(self.width(), self.height())?;
        resize::stretch_onto(&image, &self.buffer, cairo::Operator::Source)?;
        Ok(Snapshot { image })
    }

    /// Replaces the buffer contents with a snapshot.
    ///
    /// A snapshot taken at other dimensions is stretched to the current size.
    pub fn restore(&mut self, snapshot: &Snapshot) -> Result<(), SurfaceError> {
        resize::stretch_onto(&self.buffer, snapshot.image(), cairo::Operator::Source)
    }

    /// Reallocates the buffer at new dimensions, stretching existing content to fill it.
    ///
    /// On failure the surface keeps its previous buffer.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<(), SurfaceError> {
        if width == self.width() && height == self.height() {
            return Ok(());
        }
        self.buffer = resize::rebind(&self.buffer, width, height)?;
        Ok(())
    }

    /// Draws an external image stretched over the whole surface, on top of existing pixels.
    pub fn draw_image(&mut self, image: &ExternalImage) -> Result<(), SurfaceError> {
        resize::stretch_onto(&self.buffer, image.image(), cairo::Operator::Over)
    }

    fn paint_context(&self) -> Result<cairo::Context, SurfaceError> {
        let ctx = cairo::Context::new(&self.buffer)?;
        let paint = &self.paint;
        ctx.set_operator(paint.mode.to_cairo());
        ctx.set_line_width(paint.line_width);
        ctx.set_line_cap(paint.line_cap.to_cairo());
        ctx.set_line_join(cairo::LineJoin::Round);
        Ok(ctx)
    }

    /// Rasterizes a polyline (or closed polygon) with the current paint state.
    ///
    /// In erase mode the covered pixels lose alpha instead of taking the stroke color.
    pub fn stroke_path(&mut self, points: &[Point], closed: bool) -> Result<(), SurfaceError> {
        let Some((first, rest)) = points.split_first() else {
            return Ok(());
        };

        let ctx = self.paint_context()?;
        let color = self.paint.stroke_color;
        ctx.set_source_rgba(color.r, color.g, color.b, color.a * self.paint.alpha);

        ctx.move_to(first.x, first.y);
        for point in rest {
            ctx.line_to(point.x, point.y);
        }
        if closed {
            ctx.close_path();
        }
        ctx.stroke()?;
        Ok(())
    }

    /// Rasterizes a full circle outline with the current paint state.
    pub fn stroke_circle(&mut self, center: Point, radius: f64) -> Result<(), SurfaceError> {
        let ctx = self.paint_context()?;
        let color = self.paint.stroke_color;
        ctx.set_source_rgba(color.r, color.g, color.b, color.a * self.paint.alpha);

        ctx.new_path();
        ctx.arc(center.x, center.y, radius.max(0.0), 0.0, PI * 2.0);
        ctx.stroke()?;
        Ok(())
    }

    /// Stamps text with its baseline starting at `anchor`.
    ///
    /// Glyph size is derived from the current line width via the surface font's scale.
    pub fn fill_text(&mut self, text: &str, anchor: Point) -> Result<(), SurfaceError> {
        if text.is_empty() {
            return Ok(());
        }

        let ctx = self.paint_context()?;
        let size = self.font.size_for(self.paint.line_width);

        let layout = pangocairo::functions::create_layout(&ctx);
        let font_desc = pango::FontDescription::from_string(&self.font.to_pango_string(size));
        layout.set_font_description(Some(&font_desc));
        layout.set_text(text);

        // Pango positions from the top-left of the layout; we want the baseline
        let baseline = layout.baseline() as f64 / pango::SCALE as f64;
        ctx.move_to(anchor.x, anchor.y - baseline);

        let color = self.paint.fill_color;
        ctx.set_source_rgba(color.r, color.g, color.b, color.a * self.paint.alpha);
        pangocairo::functions::show_layout(&ctx, &layout);
        ctx.status()?;
        Ok(())
    }

    /// Serializes the buffer to a portable image format.
    pub fn encode(&self, format: ImageFormat) -> Result<Vec<u8>, SurfaceError> {
        let mut bytes = Vec::new();
        match format {
            ImageFormat::Png => self
                .buffer
                .write_to_png(&mut bytes)
                .map_err(SurfaceError::Encode)?,
        }
        Ok(bytes)
    }

    /// Copies out the raw premultiplied ARGB32 rows (stride included).
    pub fn raw_pixels(&self) -> Result<Vec<u8>, SurfaceError> {
        let mut copy = Vec::new();
        self.buffer.with_data(|data| copy.extend_from_slice(data))?;
        Ok(copy)
    }

    /// Reads one pixel as straight (non-premultiplied) `[r, g, b, a]`.
    ///
    /// Returns `None` outside the surface.
    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return None;
        }

        let stride = self.buffer.stride() as usize;
        let offset = y as usize * stride + x as usize * 4;
        let mut value = None;
        self.buffer
            .with_data(|data| {
                value = data
                    .get(offset..offset + 4)
                    .and_then(|bytes| bytes.try_into().ok())
                    .map(u32::from_ne_bytes);
            })
            .ok()?;

        value.map(unpremultiply)
    }
}

impl fmt::Debug for PixelSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PixelSurface")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("paint", &self.paint)
            .finish()
    }
}

fn unpremultiply(argb: u32) -> [u8; 4] {
    let a = (argb >> 24) & 0xff;
    if a == 0 {
        return [0, 0, 0, 0];
    }
    let channel = |shift: u32| (((argb >> shift) & 0xff) * 255 + a / 2) / a;
    [
        channel(16) as u8,
        channel(8) as u8,
        channel(0) as u8,
        a as u8,
    ]
}
