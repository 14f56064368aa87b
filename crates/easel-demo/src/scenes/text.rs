//! Long text in a scroll area with both scrollbars.

use anyhow::Result;
use easel_core::{Axis, Point, Rect, Size};
use easel_widgets::elements::{Scrollbar, TextView};
use easel_widgets::zones::{ScrollArea, ScrollBars, Viewport};
use easel_widgets::{App, NodeId};
use easel_window::{Event, MouseButton, PointerEvent, ScrollEvent, ScrollKind};

use super::{Scene, drag};

const VISIBLE: Rect = Rect::new(38, 38, 700, 500);
const CONTENT: Size = Size::new(720, 5500);

pub struct TextScene {
    area: NodeId,
    viewport: NodeId,
}

impl TextScene {
    pub fn build(app: &mut App) -> Result<Self> {
        let style = app.style();
        let config = app.config().scrollbar.clone();
        let area = ScrollArea::spawn(app.tree_mut(), VISIBLE, CONTENT, ScrollBars::BOTH, &config, style)?;
        let viewport = app
            .tree()
            .widget::<ScrollArea>(area)
            .map(ScrollArea::viewport)
            .ok_or(easel_widgets::TreeError::WidgetType(area, "ScrollArea"))?;

        let text = (1..=250)
            .map(|i| format!("{i:>3}  the quick brown fox jumps over the lazy dog"))
            .collect::<Vec<_>>()
            .join("\n");
        let mut view = TextView::new(Rect::from_parts(Point::ORIGIN, CONTENT), text);
        view.frame.outline = style.outline;
        view.frame.outline_thickness = -1.0;
        let view = app.tree_mut().insert(view);
        app.tree_mut().attach(viewport, view)?;
        app.attach(area)?;

        Ok(Self { area, viewport })
    }
}

impl Scene for TextScene {
    fn script(&self) -> Vec<Vec<Event>> {
        let wheel = |kind| Event::Scroll(ScrollEvent::step(kind, Axis::Vertical));
        // Wheel steps only reach the area while the pointer is over it.
        // After the wheel steps the vertical slider sits 60px down its track,
        // which starts below the 20px up button.
        let slider = Point::new(VISIBLE.right() as i32 + 10, VISIBLE.y() + 20 + 60);
        let over_text = Event::PointerMoved(PointerEvent::new(
            VISIBLE.x() + 100,
            VISIBLE.y() + 100,
            MouseButton::None,
        ));
        vec![
            std::iter::once(over_text).chain(vec![wheel(ScrollKind::Down); 3]).collect(),
            vec![wheel(ScrollKind::PageDown)],
            drag(&[slider.offset(Point::new(0, 10)), slider.offset(Point::new(0, 210))]),
            vec![wheel(ScrollKind::Up)],
            vec![Event::Closed],
        ]
    }

    fn report(&self, app: &App) {
        let tree = app.tree();
        let offset = tree
            .widget::<Viewport>(self.viewport)
            .map(|v| v.scroll_offset())
            .unwrap_or_default();
        let fraction = tree
            .widget::<ScrollArea>(self.area)
            .and_then(|a| a.scrollbar(Axis::Vertical))
            .and_then(|bar| Scrollbar::fraction(tree, bar));
        tracing::info!(?offset, ?fraction, "text scene finished");
    }
}
