//! Drawing-surface contract consumed by the widget tree.
//!
//! Backends place every primitive in the coordinate space of the current
//! target (the window, or the innermost open layer). Offsets are applied by
//! [`DrawCtx`](crate::DrawCtx) before primitives reach the backend.

use thiserror::Error;

use crate::color::Color;
use crate::scene::{Point, Rect, Size};

/// Handle to a texture produced by [`RenderBackend::end_layer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// Result type for drawing operations.
pub type Result<T> = std::result::Result<T, SurfaceError>;

/// Errors raised by a drawing surface.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// The backend could not allocate an off-screen layer.
    #[error("failed to allocate off-screen layer of {width}x{height}")]
    LayerAllocation { width: u32, height: u32 },

    /// `end_layer` was called with no layer open.
    #[error("no off-screen layer is open")]
    NoOpenLayer,

    /// A texture handle does not refer to a live texture.
    #[error("unknown texture {0:?}")]
    UnknownTexture(TextureId),

    /// A bitmap's pixel count does not match its declared size.
    #[error("bitmap of {len} pixels does not match {width}x{height}")]
    BitmapSize { len: usize, width: u32, height: u32 },

    /// Backend-specific failure.
    #[error("backend error: {0}")]
    Backend(String),
}

/// Primitive drawing operations a display backend provides.
pub trait RenderBackend {
    /// Fill `rect` with `fill` and stroke it with `outline`. A negative
    /// `thickness` draws the outline inside the rectangle.
    fn draw_rect(&mut self, rect: Rect, fill: Color, outline: Color, thickness: f32);

    fn draw_text(&mut self, pos: Point, text: &str, size: u32, color: Color);

    fn draw_texture(&mut self, pos: Point, size: Size, texture: TextureId) -> Result<()>;

    /// Blit a `size.width * size.height` buffer of packed pixels.
    fn draw_bitmap(&mut self, pos: Point, size: Size, pixels: &[u32]) -> Result<()>;

    /// Redirect subsequent primitives to a fresh off-screen layer.
    fn begin_layer(&mut self, size: Size) -> Result<()>;

    /// Finish the innermost layer, returning it as a texture and restoring
    /// the previous target.
    fn end_layer(&mut self) -> Result<TextureId>;
}
