use crate::backend::{RenderBackend, Result, TextureId};
use crate::color::Color;
use crate::scene::*;

/// Per-draw-call context: the target backend plus the accumulated offset
/// from content space to the current target.
///
/// Offsets are plain values threaded through the call tree. Entering a
/// nested scope with [`with_offset`](Self::with_offset) or
/// [`layer`](Self::layer) creates a child context, so the previous offset is
/// restored on every exit path, including early returns via `?`.
pub struct DrawCtx<'a> {
    backend: &'a mut dyn RenderBackend,
    offset: Point,
}

impl<'a> DrawCtx<'a> {
    pub fn new(backend: &'a mut dyn RenderBackend) -> Self {
        Self {
            backend,
            offset: Point::ORIGIN,
        }
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Run `f` with `delta` added to the current offset.
    pub fn with_offset<R>(&mut self, delta: Point, f: impl FnOnce(&mut DrawCtx<'_>) -> R) -> R {
        let mut inner = DrawCtx {
            backend: &mut *self.backend,
            offset: self.offset.offset(delta),
        };
        f(&mut inner)
    }

    /// Render `f` into an off-screen layer of `size` and return its texture.
    ///
    /// Inside the layer the origin is the layer's top-left corner, shifted by
    /// `content_offset`. The layer is always closed, even when `f` fails; the
    /// first error wins.
    pub fn layer(
        &mut self,
        size: Size,
        content_offset: Point,
        f: impl FnOnce(&mut DrawCtx<'_>) -> Result<()>,
    ) -> Result<TextureId> {
        self.backend.begin_layer(size)?;
        let drawn = {
            let mut inner = DrawCtx {
                backend: &mut *self.backend,
                offset: content_offset,
            };
            f(&mut inner)
        };
        let texture = self.backend.end_layer();
        drawn?;
        texture
    }

    pub fn rect(&mut self, rect: Rect, fill: Color, outline: Color, thickness: f32) {
        self.backend
            .draw_rect(rect.translate(self.offset), fill, outline, thickness);
    }

    pub fn text(&mut self, pos: Point, text: &str, size: u32, color: Color) {
        self.backend
            .draw_text(pos.offset(self.offset), text, size, color);
    }

    pub fn texture(&mut self, pos: Point, size: Size, texture: TextureId) -> Result<()> {
        self.backend.draw_texture(pos.offset(self.offset), size, texture)
    }

    pub fn bitmap(&mut self, pos: Point, size: Size, pixels: &[u32]) -> Result<()> {
        self.backend.draw_bitmap(pos.offset(self.offset), size, pixels)
    }
}
