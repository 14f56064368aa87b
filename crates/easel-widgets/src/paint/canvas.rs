use easel_config::CanvasConfig;
use easel_core::{Color, DrawCtx, Point, Rect, Result};
use easel_window::{Event, EventMask};

use super::tools::{PixelBuffer, Tool, ToolColors, ToolSettings};
use crate::elements::Frame;
use crate::event_handler::{Children, EventCtx, EventResult, Widget};

/// Widget owning a pixel buffer that the active tool paints into.
pub struct PaintCanvas {
    pub frame: Frame,
    pixels: PixelBuffer,
    colors: ToolColors,
    tool: Option<Box<dyn Tool>>,
    settings: ToolSettings,
    painting: bool,
}

impl PaintCanvas {
    pub fn new(rect: Rect, colors: ToolColors) -> Self {
        Self {
            frame: Frame::new(rect),
            pixels: PixelBuffer::new(rect.size, colors.background),
            colors,
            tool: None,
            settings: ToolSettings::default(),
            painting: false,
        }
    }

    pub fn from_config(origin: Point, config: &CanvasConfig) -> Self {
        let colors = ToolColors {
            foreground: Color::from_array(config.foreground),
            background: Color::from_array(config.background),
        };
        let rect = Rect::new(origin.x, origin.y, config.width, config.height);
        Self::new(rect, colors)
    }

    /// Make `tool` active with default settings. A stroke in progress is
    /// abandoned.
    pub fn set_tool(&mut self, tool: Box<dyn Tool>) {
        self.settings = ToolSettings::from_schema(tool.schema());
        tracing::debug!(tool = tool.name(), "tool selected");
        self.tool = Some(tool);
        self.painting = false;
    }

    pub fn tool_name(&self) -> Option<&str> {
        self.tool.as_deref().map(|t| t.name())
    }

    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut ToolSettings {
        &mut self.settings
    }

    pub fn set_foreground(&mut self, color: Color) {
        self.colors.foreground = color;
    }

    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    pub fn clear(&mut self) {
        self.pixels.fill(self.colors.background);
    }

    fn local(&self, p: Point) -> Point {
        p.offset(self.frame.rect.origin.negated())
    }
}

impl Widget for PaintCanvas {
    fn interest(&self) -> EventMask {
        EventMask::POINTER
    }

    fn handle_event(&mut self, _ctx: &mut EventCtx<'_>, event: &Event) -> EventResult {
        let Some(pointer) = event.pointer() else {
            return EventResult::Ignored;
        };
        let inside = self.frame.rect.contains(pointer.position);
        let local = self.local(pointer.position);
        let Some(tool) = self.tool.as_deref_mut() else {
            return EventResult::Ignored;
        };

        match event {
            Event::PointerPressed(_) if inside && !self.painting => {
                self.painting = true;
                tool.start(&mut self.pixels, local, self.colors, &self.settings);
            }
            Event::PointerMoved(_) if self.painting && inside => {
                tool.apply(&mut self.pixels, local);
            }
            Event::PointerReleased(_) if self.painting => {
                self.painting = false;
                tool.stop(&mut self.pixels, local);
            }
            _ => return EventResult::Ignored,
        }
        EventResult::Handled
    }

    fn draw(&self, cx: &mut DrawCtx<'_>, children: Children<'_>) -> Result<()> {
        cx.bitmap(self.frame.rect.origin, self.frame.rect.size, self.pixels.data())?;
        children.draw(cx)
    }

    fn frame(&self) -> Option<&Frame> {
        Some(&self.frame)
    }
}
