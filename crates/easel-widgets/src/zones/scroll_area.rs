use easel_config::ScrollbarConfig;
use easel_core::{Axis, Point, Rect, Size};
use easel_window::{Event, EventMask, ScrollKind};

use super::viewport::Viewport;
use crate::elements::{ControlStyle, Scrollbar};
use crate::event_handler::{EventCtx, EventResult, Widget};
use crate::tree::{NodeId, Tree, TreeError};

/// Which scrollbars a [`ScrollArea`] carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollBars {
    pub horizontal: bool,
    pub vertical: bool,
}

impl ScrollBars {
    pub const BOTH: Self = Self {
        horizontal: true,
        vertical: true,
    };
    pub const VERTICAL: Self = Self {
        horizontal: false,
        vertical: true,
    };
}

/// A viewport plus the scrollbars that drive it.
///
/// The vertical bar sits to the right of the visible rectangle and the
/// horizontal bar below it. Slider sizes follow the visible share of the
/// content; the viewport span is whatever content does not fit.
///
/// Wheel steps go to the bar on the matching axis while the pointer is over
/// the area, unless a scroll area nested in the content is hovered and has a
/// bar on that axis. Relocations from the area's own bars only move its own
/// viewport.
pub struct ScrollArea {
    viewport: NodeId,
    horizontal: Option<NodeId>,
    vertical: Option<NodeId>,
    visible: Rect,
    button_size: u32,
    thickness: u32,
    hovered: bool,
}

impl ScrollArea {
    pub fn spawn(
        tree: &mut Tree,
        visible: Rect,
        content: Size,
        bars: ScrollBars,
        config: &ScrollbarConfig,
        style: ControlStyle,
    ) -> Result<NodeId, TreeError> {
        let viewport = tree.insert(Viewport::new(visible.origin, visible.size));
        let track_len = |extent: u32| extent.saturating_sub(2 * config.button_size);

        let vertical = if bars.vertical {
            let bar = Scrollbar::spawn(tree, Axis::Vertical, track_len(visible.size.height), config, style)?;
            let origin = Point::new(visible.right() as i32, visible.y());
            Scrollbar::set_position(tree, bar, origin)?;
            Some(bar)
        } else {
            None
        };
        let horizontal = if bars.horizontal {
            let bar = Scrollbar::spawn(tree, Axis::Horizontal, track_len(visible.size.width), config, style)?;
            let origin = Point::new(visible.x(), visible.bottom() as i32);
            Scrollbar::set_position(tree, bar, origin)?;
            Some(bar)
        } else {
            None
        };

        let area = tree.insert(ScrollArea {
            viewport,
            horizontal,
            vertical,
            visible,
            button_size: config.button_size,
            thickness: config.thickness,
            hovered: false,
        });
        tree.attach(area, viewport)?;
        for bar in vertical.into_iter().chain(horizontal) {
            tree.attach(area, bar)?;
        }
        Self::set_content_size(tree, area, content)?;
        Ok(area)
    }

    /// Node that content should be attached to.
    pub fn viewport(&self) -> NodeId {
        self.viewport
    }

    pub fn scrollbar(&self, axis: Axis) -> Option<NodeId> {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
        }
    }

    /// Visible rectangle plus the strips taken by the bars.
    pub fn extent(&self) -> Rect {
        let mut extent = self.visible;
        if self.vertical.is_some() {
            extent.size.width += self.thickness;
        }
        if self.horizontal.is_some() {
            extent.size.height += self.thickness;
        }
        extent
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    fn claims_wheel(&self, axis: Axis) -> bool {
        self.hovered && self.scrollbar(axis).is_some()
    }

    fn is_own_bar(&self, id: NodeId) -> bool {
        self.horizontal == Some(id) || self.vertical == Some(id)
    }

    /// Resize the scrollable content: updates the viewport span and the
    /// slider sizes.
    pub fn set_content_size(tree: &mut Tree, area: NodeId, content: Size) -> Result<(), TreeError> {
        let (viewport, horizontal, vertical, visible, button) =
            tree.with_widget::<ScrollArea, _>(area, |a| {
                (a.viewport, a.horizontal, a.vertical, a.visible, a.button_size)
            })?;

        let span = Size::new(
            content.width.saturating_sub(visible.size.width),
            content.height.saturating_sub(visible.size.height),
        );
        tree.with_widget::<Viewport, _>(viewport, |v| v.set_span(span))?;

        for (bar, axis) in [(horizontal, Axis::Horizontal), (vertical, Axis::Vertical)] {
            let Some(bar) = bar else {
                continue;
            };
            let length = tree
                .widget::<Scrollbar>(bar)
                .map(Scrollbar::length)
                .ok_or(TreeError::WidgetType(bar, "Scrollbar"))?;
            let size = slider_size(length, visible.size.along(axis), content.along(axis), button);
            Scrollbar::set_slider_size(tree, bar, size)?;
        }
        tracing::debug!(?area, ?span, "scroll area resized");
        Ok(())
    }
}

impl Widget for ScrollArea {
    fn interest(&self) -> EventMask {
        EventMask::POINTER_MOVE | EventMask::SCROLL
    }

    fn handle_event(&mut self, ctx: &mut EventCtx<'_>, event: &Event) -> EventResult {
        match event {
            Event::PointerMoved(pointer) => {
                self.hovered = self.extent().contains(pointer.position);
                EventResult::Ignored
            }
            Event::Scroll(scroll) if scroll.kind == ScrollKind::Relocation => {
                match ctx.sender() {
                    Some(bar) if self.is_own_bar(bar) => {
                        ctx.send(self.viewport, event.clone());
                        EventResult::Handled
                    }
                    _ => EventResult::Ignored,
                }
            }
            Event::Scroll(scroll) => {
                if !self.hovered {
                    return EventResult::Ignored;
                }
                let tree = ctx.tree();
                let nested_claim = tree.descendants(self.viewport).into_iter().any(|id| {
                    tree.widget::<ScrollArea>(id)
                        .is_some_and(|inner| inner.claims_wheel(scroll.axis))
                });
                if nested_claim {
                    return EventResult::Ignored;
                }
                let Some(bar) = self.scrollbar(scroll.axis) else {
                    return EventResult::Ignored;
                };
                ctx.send(bar, event.clone());
                EventResult::Handled
            }
            _ => EventResult::Ignored,
        }
    }
}

fn slider_size(length: u32, visible: u32, content: u32, min: u32) -> u32 {
    if content <= visible {
        return length;
    }
    let share = (length as u64 * visible as u64 / content as u64) as u32;
    share.max(min.min(length))
}
