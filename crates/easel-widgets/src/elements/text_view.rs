use easel_core::{Color, DrawCtx, Point, Rect, Result};

use super::frame::Frame;
use crate::event_handler::{Children, Widget};

/// Block of text clipped to its rectangle and shifted by a view offset.
pub struct TextView {
    pub frame: Frame,
    text: String,
    view: Point,
    text_size: u32,
    color: Color,
}

impl TextView {
    pub fn new(rect: Rect, text: impl Into<String>) -> Self {
        Self {
            frame: Frame::new(rect),
            text: text.into(),
            view: Point::ORIGIN,
            text_size: 14,
            color: Color::WHITE,
        }
    }

    pub fn with_style(mut self, text_size: u32, color: Color) -> Self {
        self.text_size = text_size;
        self.color = color;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn view(&self) -> Point {
        self.view
    }

    /// Offset of the visible window into the text.
    pub fn set_view(&mut self, view: Point) {
        self.view = view;
    }

    fn line_height(&self) -> i32 {
        self.text_size as i32 + 4
    }
}

impl Widget for TextView {
    fn draw(&self, cx: &mut DrawCtx<'_>, children: Children<'_>) -> Result<()> {
        let rect = self.frame.rect;
        let texture = cx.layer(rect.size, self.view.negated(), |cx| {
            let mut y = 0;
            for line in self.text.lines() {
                cx.text(Point::new(0, y), line, self.text_size, self.color);
                y += self.line_height();
            }
            Ok(())
        })?;
        cx.texture(rect.origin, rect.size, texture)?;
        children.draw(cx)
    }

    fn frame(&self) -> Option<&Frame> {
        Some(&self.frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Tree;
    use easel_core::{Command, DisplayList};

    #[test]
    fn test_text_is_shifted_by_view_inside_layer() {
        let mut tree = Tree::new();
        let mut view = TextView::new(Rect::new(5, 5, 100, 40), "one\ntwo");
        view.set_view(Point::new(3, 18));
        let id = tree.insert(view);

        let mut list = DisplayList::new();
        tree.draw_node(id, &mut DrawCtx::new(&mut list)).unwrap();

        let texts: Vec<(Point, &str)> = list.texts().map(|(p, t)| (*p, t)).collect();
        assert_eq!(texts, vec![(Point::new(-3, -18), "one"), (Point::new(-3, 0), "two")]);
        assert!(matches!(list.commands.first(), Some(Command::BeginLayer(_))));
        assert!(matches!(
            list.commands.last(),
            Some(Command::DrawTexture { pos, .. }) if *pos == Point::new(5, 5)
        ));
    }
}
