use easel_core::{Axis, Color, DrawCtx, Point, Rect, Result, Size};
use easel_window::{Event, EventMask, ScrollKind};

use crate::event_handler::{Children, EventCtx, EventResult, Widget};

/// Scrollable window onto its children.
///
/// Children are laid out in content space and rendered into an off-screen
/// layer of the viewport's size, shifted by the scroll offset, which is then
/// composited at `position`. Offsets stay within `[0, span]` per axis.
pub struct Viewport {
    pub position: Point,
    pub size: Size,
    pub background: Color,
    span: Size,
    scroll_offset_x: f32,
    scroll_offset_y: f32,
}

impl Viewport {
    pub fn new(position: Point, size: Size) -> Self {
        Self {
            position,
            size,
            background: Color::TRANSPARENT,
            span: Size::new(0, 0),
            scroll_offset_x: 0.0,
            scroll_offset_y: 0.0,
        }
    }

    pub fn with_span(mut self, span: Size) -> Self {
        self.set_span(span);
        self
    }

    pub fn visible_rect(&self) -> Rect {
        Rect::from_parts(self.position, self.size)
    }

    /// Maximum scroll offset per axis.
    pub fn span(&self) -> Size {
        self.span
    }

    /// Set the scrollable range, clamping the current offsets into it.
    pub fn set_span(&mut self, span: Size) {
        self.span = span;
        self.scroll_offset_x = self.scroll_offset_x.clamp(0.0, span.width as f32);
        self.scroll_offset_y = self.scroll_offset_y.clamp(0.0, span.height as f32);
    }

    pub fn scroll_offset_along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.scroll_offset_x,
            Axis::Vertical => self.scroll_offset_y,
        }
    }

    /// Scroll offset rounded to whole pixels.
    pub fn scroll_offset(&self) -> Point {
        Point::new(
            self.scroll_offset_x.round() as i32,
            self.scroll_offset_y.round() as i32,
        )
    }

    /// Scroll to `fraction` of the span on `axis`.
    pub fn scroll_to(&mut self, axis: Axis, fraction: f32) {
        let span = self.span.along(axis) as f32;
        let offset = (fraction * span).clamp(0.0, span);
        match axis {
            Axis::Horizontal => self.scroll_offset_x = offset,
            Axis::Vertical => self.scroll_offset_y = offset,
        }
    }

    /// Current offset as a fraction of the span; 0 when nothing scrolls.
    pub fn fraction(&self, axis: Axis) -> f32 {
        let span = self.span.along(axis);
        if span == 0 {
            0.0
        } else {
            self.scroll_offset_along(axis) / span as f32
        }
    }

    /// Map a point from the parent's space into content space.
    pub fn to_content(&self, p: Point) -> Point {
        p.offset(self.position.negated()).offset(self.scroll_offset())
    }
}

impl Widget for Viewport {
    fn local_interest(&self) -> EventMask {
        EventMask::SCROLL
    }

    fn handle_event(&mut self, _ctx: &mut EventCtx<'_>, event: &Event) -> EventResult {
        match event {
            Event::Scroll(scroll) if scroll.kind == ScrollKind::Relocation => {
                let Some(fraction) = scroll.position else {
                    return EventResult::Ignored;
                };
                self.scroll_to(scroll.axis, fraction);
                tracing::trace!(axis = ?scroll.axis, fraction, offset = ?self.scroll_offset(), "viewport scrolled");
                EventResult::Handled
            }
            _ => EventResult::Ignored,
        }
    }

    fn child_event(&self, event: &Event) -> Option<Event> {
        match event {
            Event::PointerPressed(p) if !self.visible_rect().contains(p.position) => None,
            Event::Scroll(scroll) if scroll.kind == ScrollKind::Relocation => None,
            _ => Some(event.translated(self.to_content(Point::ORIGIN))),
        }
    }

    fn draw(&self, cx: &mut DrawCtx<'_>, children: Children<'_>) -> Result<()> {
        let visible = self.visible_rect();
        cx.rect(visible, self.background, Color::TRANSPARENT, 0.0);
        let texture = cx.layer(self.size, self.scroll_offset().negated(), |cx| children.draw(cx))?;
        cx.texture(self.position, self.size, texture)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::Panel;
    use crate::tree::Tree;
    use easel_core::{Command, DisplayList, SurfaceError};
    use easel_window::{MouseButton, PointerEvent, ScrollEvent};

    #[test]
    fn test_relocation_round_trip() {
        let mut tree = Tree::new();
        let id = tree.insert(
            Viewport::new(Point::new(0, 0), Size::new(100, 100)).with_span(Size::new(300, 50)),
        );
        for f in [0.0, 0.25, 0.5, 1.0] {
            tree.process_event(id, &Event::Scroll(ScrollEvent::relocation(f, Axis::Horizontal)));
            let vp = tree.widget::<Viewport>(id).unwrap();
            assert!((vp.scroll_offset_along(Axis::Horizontal) - f * 300.0).abs() < 1e-4);
            assert!((vp.fraction(Axis::Horizontal) - f).abs() < 1e-6);
        }
    }

    #[test]
    fn test_offsets_stay_within_span() {
        let mut vp = Viewport::new(Point::ORIGIN, Size::new(10, 10)).with_span(Size::new(40, 40));
        vp.scroll_to(Axis::Vertical, 1.5);
        assert_eq!(vp.scroll_offset_along(Axis::Vertical), 40.0);
        vp.set_span(Size::new(40, 10));
        assert_eq!(vp.scroll_offset_along(Axis::Vertical), 10.0);
    }

    #[test]
    fn test_pointer_translated_into_content_space() {
        let mut vp = Viewport::new(Point::new(50, 50), Size::new(100, 100)).with_span(Size::new(0, 200));
        vp.scroll_to(Axis::Vertical, 0.5);

        let press = Event::PointerPressed(PointerEvent::new(60, 70, MouseButton::Left));
        assert_eq!(
            vp.child_event(&press).and_then(|e| e.pointer().map(|p| p.position)),
            Some(Point::new(10, 120))
        );

        let outside = Event::PointerPressed(PointerEvent::new(10, 10, MouseButton::Left));
        assert_eq!(vp.child_event(&outside), None);
        let moved = Event::PointerMoved(PointerEvent::new(10, 10, MouseButton::None));
        assert!(vp.child_event(&moved).is_some());

        let relocation = Event::Scroll(ScrollEvent::relocation(0.5, Axis::Vertical));
        assert_eq!(vp.child_event(&relocation), None);
        let wheel = Event::Scroll(ScrollEvent::step(ScrollKind::Down, Axis::Vertical));
        assert_eq!(vp.child_event(&wheel), Some(wheel.clone()));
    }

    #[test]
    fn test_draw_composites_layer_at_position() {
        let mut tree = Tree::new();
        let mut vp = Viewport::new(Point::new(5, 5), Size::new(20, 20)).with_span(Size::new(0, 30));
        vp.scroll_to(Axis::Vertical, 1.0);
        let id = tree.insert(vp);
        let child = tree.insert(Panel::new(Rect::new(0, 40, 10, 10)));
        tree.attach(id, child).unwrap();

        let mut list = DisplayList::new();
        tree.draw_node(id, &mut DrawCtx::new(&mut list)).unwrap();

        assert_eq!(list.open_layers(), 0);
        assert!(list.rects().any(|r| *r == Rect::new(0, 10, 10, 10)));
        assert!(matches!(
            list.commands.last(),
            Some(Command::DrawTexture { pos, .. }) if *pos == Point::new(5, 5)
        ));
    }

    #[test]
    fn test_layer_failure_propagates() {
        let mut tree = Tree::new();
        let id = tree.insert(Viewport::new(Point::ORIGIN, Size::new(20, 20)));
        let mut list = DisplayList::new();
        list.fail_layers = true;
        let err = tree.draw_node(id, &mut DrawCtx::new(&mut list));
        assert!(matches!(err, Err(SurfaceError::LayerAllocation { .. })));
        assert_eq!(list.open_layers(), 0);
    }
}
