use easel_core::{DrawCtx, Rect, Result};

use super::frame::{ControlStyle, Frame};
use crate::event_handler::{Children, Widget};

/// Pure container: draws nothing of its own and only routes.
#[derive(Debug, Default, Clone, Copy)]
pub struct Group;

impl Group {
    pub fn new() -> Self {
        Self
    }
}

impl Widget for Group {}

/// Container with a visible rectangle behind its children.
#[derive(Debug, Clone)]
pub struct Panel {
    pub frame: Frame,
}

impl Panel {
    pub fn new(rect: Rect) -> Self {
        Self {
            frame: Frame::new(rect),
        }
    }

    pub fn styled(rect: Rect, style: &ControlStyle) -> Self {
        Self {
            frame: Frame::styled(rect, style),
        }
    }
}

impl Widget for Panel {
    fn draw(&self, cx: &mut DrawCtx<'_>, children: Children<'_>) -> Result<()> {
        self.frame.paint(cx);
        children.draw(cx)
    }

    fn frame(&self) -> Option<&Frame> {
        Some(&self.frame)
    }
}
