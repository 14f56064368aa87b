//! Pixel painting: tool interface, built-in tools and the canvas widget.

pub mod canvas;
pub mod tools;

pub use canvas::PaintCanvas;
pub use tools::{
    BrushTool, EraserTool, PixelBuffer, SettingKind, SettingSpec, Tool, ToolColors, ToolRegistry,
    ToolSettings,
};
