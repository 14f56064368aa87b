//! Scrollbar composite: a track strip, two step buttons and a slider.

use easel_config::ScrollbarConfig;
use easel_core::{Axis, DrawCtx, Point, Rect, Result as DrawResult, Size};
use easel_window::{Event, EventMask, ScrollEvent, ScrollKind};

use super::button::Button;
use super::frame::{ControlStyle, Frame};
use super::slider::Slider;
use crate::event_handler::{Children, EventCtx, EventResult, Widget};
use crate::tree::{NodeId, Tree, TreeError};

/// Owner of the four scrollbar parts. Step and page requests posted by its
/// buttons and track, or sent to the bar, go to its own slider. The slider's
/// relocations go on to the bar's parent. Scroll interest is local, so
/// scroll events routed from above never reach the bar.
pub struct Scrollbar {
    axis: Axis,
    length: u32,
    button_size: u32,
    thickness: u32,
    track: NodeId,
    up: NodeId,
    down: NodeId,
    slider: NodeId,
}

impl Scrollbar {
    /// Build a scrollbar with a track of `length` along `axis`, placed at
    /// the origin. Children are attached track first so the slider paints
    /// on top.
    pub fn spawn(
        tree: &mut Tree,
        axis: Axis,
        length: u32,
        config: &ScrollbarConfig,
        style: ControlStyle,
    ) -> Result<NodeId, TreeError> {
        let square = Rect::new(0, 0, config.button_size, config.button_size);
        let slider = tree.insert(
            Slider::new(axis, square, style).with_increments(config.step, config.page),
        );
        let track = tree.insert(Track::new(axis, slider, Rect::new(0, 0, 0, 0), style));
        let up = tree.insert(step_button(axis, ScrollKind::Up, square, style));
        let down = tree.insert(step_button(axis, ScrollKind::Down, square, style));

        let bar = tree.insert(Scrollbar {
            axis,
            length,
            button_size: config.button_size,
            thickness: config.thickness,
            track,
            up,
            down,
            slider,
        });
        for child in [track, up, down, slider] {
            tree.attach(bar, child)?;
        }
        Self::set_position(tree, bar, Point::ORIGIN)?;
        Self::set_slider_size(tree, bar, config.button_size)?;
        tracing::debug!(?bar, ?axis, length, "scrollbar created");
        Ok(bar)
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn slider(&self) -> NodeId {
        self.slider
    }

    pub fn track(&self) -> NodeId {
        self.track
    }

    pub fn buttons(&self) -> (NodeId, NodeId) {
        (self.up, self.down)
    }

    /// Lay out the parts starting at `origin`: `[up][track … length][down]`.
    pub fn set_position(tree: &mut Tree, bar: NodeId, origin: Point) -> Result<(), TreeError> {
        let (axis, length, button, thickness, track, up, down, slider) = tree
            .with_widget::<Scrollbar, _>(bar, |b| {
                (b.axis, b.length, b.button_size, b.thickness, b.track, b.up, b.down, b.slider)
            })?;

        let along = origin.along(axis);
        let track_origin = origin.with_along(axis, along + button as i32);
        let down_origin = origin.with_along(axis, along + (button + length) as i32);
        let cross = Size::new(thickness, thickness);

        tree.with_widget::<Button, _>(up, |b| {
            b.frame.rect = Rect::from_parts(origin, cross.with_along(axis, button));
        })?;
        tree.with_widget::<Button, _>(down, |b| {
            b.frame.rect = Rect::from_parts(down_origin, cross.with_along(axis, button));
        })?;
        tree.with_widget::<Track, _>(track, |t| {
            t.frame.rect = Rect::from_parts(track_origin, cross.with_along(axis, length));
        })?;
        tree.with_widget::<Slider, _>(slider, |s| {
            let size = s.frame.rect.size.along(axis);
            s.set_size(cross.with_along(axis, size));
            s.set_position(track_origin);
        })?;
        Ok(())
    }

    /// Resize the slider along the axis; its travel becomes what is left
    /// of the track.
    pub fn set_slider_size(tree: &mut Tree, bar: NodeId, size: u32) -> Result<(), TreeError> {
        let (axis, length, thickness, slider) =
            tree.with_widget::<Scrollbar, _>(bar, |b| (b.axis, b.length, b.thickness, b.slider))?;
        let size = size.min(length);
        tree.with_widget::<Slider, _>(slider, |s| {
            s.set_size(Size::new(thickness, thickness).with_along(axis, size));
            s.set_limit(length as i32 - size as i32);
        })
    }

    pub fn fraction(tree: &Tree, bar: NodeId) -> Option<f32> {
        let slider = tree.widget::<Scrollbar>(bar)?.slider;
        tree.widget::<Slider>(slider).map(Slider::fraction)
    }

    pub fn set_style(tree: &mut Tree, bar: NodeId, style: ControlStyle) -> Result<(), TreeError> {
        let (track, up, down, slider) =
            tree.with_widget::<Scrollbar, _>(bar, |b| (b.track, b.up, b.down, b.slider))?;
        for button in [up, down] {
            tree.with_widget::<Button, _>(button, |b| {
                b.style = style;
                b.frame = Frame::styled(b.frame.rect, &style);
            })?;
        }
        tree.with_widget::<Track, _>(track, |t| t.frame = Frame::styled(t.frame.rect, &style))?;
        tree.with_widget::<Slider, _>(slider, |s| {
            s.style = style;
            s.frame = Frame::styled(s.frame.rect, &style);
        })
    }
}

impl Widget for Scrollbar {
    fn local_interest(&self) -> EventMask {
        EventMask::SCROLL
    }

    fn handle_event(&mut self, ctx: &mut EventCtx<'_>, event: &Event) -> EventResult {
        let Event::Scroll(scroll) = event else {
            return EventResult::Ignored;
        };
        if scroll.kind == ScrollKind::Relocation {
            if ctx.sender() != Some(self.slider) {
                return EventResult::Ignored;
            }
            ctx.post_to_parent(Event::Scroll(ScrollEvent::relocation(
                scroll.position.unwrap_or(0.0),
                self.axis,
            )));
        } else {
            ctx.send(self.slider, event.clone());
        }
        EventResult::Handled
    }
}

fn step_button(axis: Axis, kind: ScrollKind, rect: Rect, style: ControlStyle) -> Button {
    Button::new(rect, style).on_click(move |ctx| {
        ctx.post_to_parent(Event::Scroll(ScrollEvent::step(kind, axis)));
    })
}

/// Track strip behind the slider. A release on the strip pages toward the
/// pointer.
pub struct Track {
    pub frame: Frame,
    axis: Axis,
    slider: NodeId,
}

impl Track {
    fn new(axis: Axis, slider: NodeId, rect: Rect, style: ControlStyle) -> Self {
        Self {
            frame: Frame::styled(rect, &style),
            axis,
            slider,
        }
    }
}

impl Widget for Track {
    fn interest(&self) -> EventMask {
        EventMask::POINTER_RELEASE
    }

    fn handle_event(&mut self, ctx: &mut EventCtx<'_>, event: &Event) -> EventResult {
        let Event::PointerReleased(pointer) = event else {
            return EventResult::Ignored;
        };
        let p = pointer.position;
        if !self.frame.hit_test(p) || ctx.tree().hit_test(self.slider, p) {
            return EventResult::Ignored;
        }
        let Some(slider) = ctx.tree().frame(self.slider) else {
            return EventResult::Ignored;
        };

        let kind = if p.along(self.axis) < slider.rect.origin.along(self.axis) {
            ScrollKind::PageUp
        } else {
            ScrollKind::PageDown
        };
        ctx.post_to_parent(Event::Scroll(ScrollEvent::step(kind, self.axis)));
        EventResult::Handled
    }

    fn frame(&self) -> Option<&Frame> {
        Some(&self.frame)
    }

    fn draw(&self, cx: &mut DrawCtx<'_>, children: Children<'_>) -> DrawResult<()> {
        self.frame.paint(cx);
        children.draw(cx)
    }
}
