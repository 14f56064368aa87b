use crate::backend::{RenderBackend, Result, SurfaceError, TextureId};
use crate::color::Color;
use crate::scene::*;

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    DrawRect { rect: Rect, fill: Color, outline: Color, thickness: f32 },
    DrawText { pos: Point, text: String, size: u32, color: Color },
    DrawTexture { pos: Point, size: Size, texture: TextureId },
    DrawBitmap { pos: Point, size: Size, pixels: Vec<u32> },
    BeginLayer(Size),
    EndLayer(TextureId),
}

/// Backend that records commands instead of rasterizing them.
///
/// Used for headless runs and for asserting draw order in tests. Layers are
/// tracked so that unbalanced `begin_layer`/`end_layer` pairs surface as
/// errors exactly as a GPU backend would report them.
#[derive(Clone, Debug, Default)]
pub struct DisplayList {
    pub commands: Vec<Command>,
    open_layers: Vec<Size>,
    next_texture: u32,
    /// When set, `begin_layer` fails. Lets tests exercise error paths.
    pub fail_layers: bool,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of layers begun but not yet ended.
    pub fn open_layers(&self) -> usize {
        self.open_layers.len()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.open_layers.clear();
    }

    /// Rectangles recorded so far, in draw order.
    pub fn rects(&self) -> impl Iterator<Item = &Rect> + '_ {
        self.commands.iter().filter_map(|c| match c {
            Command::DrawRect { rect, .. } => Some(rect),
            _ => None,
        })
    }

    /// Text runs recorded so far, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = (&Point, &str)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            Command::DrawText { pos, text, .. } => Some((pos, text.as_str())),
            _ => None,
        })
    }
}

impl RenderBackend for DisplayList {
    fn draw_rect(&mut self, rect: Rect, fill: Color, outline: Color, thickness: f32) {
        self.commands.push(Command::DrawRect { rect, fill, outline, thickness });
    }

    fn draw_text(&mut self, pos: Point, text: &str, size: u32, color: Color) {
        self.commands.push(Command::DrawText {
            pos,
            text: text.to_owned(),
            size,
            color,
        });
    }

    fn draw_texture(&mut self, pos: Point, size: Size, texture: TextureId) -> Result<()> {
        if texture.0 >= self.next_texture {
            return Err(SurfaceError::UnknownTexture(texture));
        }
        self.commands.push(Command::DrawTexture { pos, size, texture });
        Ok(())
    }

    fn draw_bitmap(&mut self, pos: Point, size: Size, pixels: &[u32]) -> Result<()> {
        if pixels.len() != size.area() {
            return Err(SurfaceError::BitmapSize {
                len: pixels.len(),
                width: size.width,
                height: size.height,
            });
        }
        self.commands.push(Command::DrawBitmap {
            pos,
            size,
            pixels: pixels.to_vec(),
        });
        Ok(())
    }

    fn begin_layer(&mut self, size: Size) -> Result<()> {
        if self.fail_layers {
            return Err(SurfaceError::LayerAllocation {
                width: size.width,
                height: size.height,
            });
        }
        self.open_layers.push(size);
        self.commands.push(Command::BeginLayer(size));
        Ok(())
    }

    fn end_layer(&mut self) -> Result<TextureId> {
        self.open_layers.pop().ok_or(SurfaceError::NoOpenLayer)?;
        let id = TextureId(self.next_texture);
        self.next_texture += 1;
        self.commands.push(Command::EndLayer(id));
        Ok(id)
    }
}
