use easel_core::{Axis, DrawCtx, Point, Rect, Result, Size};
use easel_window::{Event, EventMask, ScrollEvent, ScrollKind};

use super::frame::{ControlStyle, Frame};
use super::interaction::{Interaction, Signals};
use crate::event_handler::{Children, EventCtx, EventResult, Widget};

/// Draggable thumb constrained to `[pivot, pivot + limit]` along one axis.
///
/// Any change of position is reported to the parent as a relocation
/// carrying the normalized fraction of travel.
pub struct Slider {
    pub frame: Frame,
    pub style: ControlStyle,
    axis: Axis,
    interaction: Interaction,
    pivot: i32,
    limit: i32,
    stroke_start: i32,
    movement_start: i32,
    step: i32,
    page: i32,
}

impl Slider {
    pub fn new(axis: Axis, rect: Rect, style: ControlStyle) -> Self {
        Self {
            frame: Frame::styled(rect, &style),
            style,
            axis,
            interaction: Interaction::default(),
            pivot: rect.origin.along(axis),
            limit: 0,
            stroke_start: 0,
            movement_start: 0,
            step: 10,
            page: 30,
        }
    }

    /// Travel for up/down and page-up/page-down requests.
    pub fn with_increments(mut self, step: i32, page: i32) -> Self {
        self.step = step;
        self.page = page;
        self
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn pivot(&self) -> i32 {
        self.pivot
    }

    pub fn limit(&self) -> i32 {
        self.limit
    }

    /// Current position along the axis.
    pub fn offset(&self) -> i32 {
        self.frame.rect.origin.along(self.axis)
    }

    /// Move the whole slider. The new position along the axis becomes the
    /// pivot.
    pub fn set_position(&mut self, position: Point) {
        self.frame.rect.origin = position;
        self.pivot = position.along(self.axis);
    }

    pub fn set_size(&mut self, size: Size) {
        self.frame.rect.size = size;
    }

    pub fn set_limit(&mut self, limit: i32) {
        self.limit = limit.max(0);
        self.move_to(self.offset());
    }

    /// Travel as a fraction of the limit; 0 when the slider cannot move.
    pub fn fraction(&self) -> f32 {
        if self.limit == 0 {
            0.0
        } else {
            (self.offset() - self.pivot) as f32 / self.limit as f32
        }
    }

    pub fn set_fraction(&mut self, fraction: f32) {
        let travel = (fraction * self.limit as f32).round() as i32;
        self.move_to(self.pivot + travel);
    }

    fn move_to(&mut self, along: i32) {
        let clamped = along.clamp(self.pivot, self.pivot + self.limit);
        self.frame.rect.origin = self.frame.rect.origin.with_along(self.axis, clamped);
    }

    fn apply_scroll(&mut self, scroll: &ScrollEvent) {
        match scroll.kind {
            ScrollKind::Up => self.move_to(self.offset() - self.step),
            ScrollKind::Down => self.move_to(self.offset() + self.step),
            ScrollKind::PageUp => self.move_to(self.offset() - self.page),
            ScrollKind::PageDown => self.move_to(self.offset() + self.page),
            ScrollKind::Relocation => {
                if let Some(fraction) = scroll.position {
                    self.set_fraction(fraction);
                }
            }
        }
    }
}

impl Widget for Slider {
    fn interest(&self) -> EventMask {
        EventMask::POINTER
    }

    fn local_interest(&self) -> EventMask {
        EventMask::SCROLL
    }

    fn handle_event(&mut self, ctx: &mut EventCtx<'_>, event: &Event) -> EventResult {
        let before = self.offset();
        let mut released = false;

        match event {
            Event::Scroll(scroll) if scroll.axis == self.axis => self.apply_scroll(scroll),
            Event::Scroll(_) => return EventResult::Ignored,
            _ => {
                let signals = self.interaction.update(event, &self.frame);
                if let Some(pointer) = event.pointer() {
                    let along = pointer.position.along(self.axis);
                    if signals.contains(Signals::PRESS) {
                        self.stroke_start = along;
                        self.movement_start = self.offset();
                    } else if signals.intersects(Signals::DRAG | Signals::RELEASE) {
                        self.move_to(self.movement_start + along - self.stroke_start);
                    }
                }
                released = signals.contains(Signals::RELEASE);
                self.frame.background = self.interaction.background(&self.style);
            }
        }

        if self.offset() != before || released {
            ctx.post_to_parent(Event::Scroll(ScrollEvent::relocation(
                self.fraction(),
                self.axis,
            )));
            EventResult::Handled
        } else {
            EventResult::Ignored
        }
    }

    fn draw(&self, cx: &mut DrawCtx<'_>, children: Children<'_>) -> Result<()> {
        self.frame.paint(cx);
        children.draw(cx)
    }

    fn frame(&self) -> Option<&Frame> {
        Some(&self.frame)
    }
}
