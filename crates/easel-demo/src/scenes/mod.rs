use anyhow::Result;
use easel_core::Point;
use easel_widgets::App;
use easel_window::{Event, MouseButton, PointerEvent};

pub mod paint;
pub mod text;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneKind {
    Paint,
    Text,
}

pub trait Scene {
    /// Input batches, one per frame.
    fn script(&self) -> Vec<Vec<Event>>;

    /// Apply app-level reactions queued by widgets during the frame.
    fn after_frame(&mut self, app: &mut App) -> Result<()> {
        let _ = app;
        Ok(())
    }

    fn report(&self, app: &App);
}

pub fn click(at: Point) -> Vec<Event> {
    let pointer = PointerEvent {
        position: at,
        button: MouseButton::Left,
    };
    vec![
        Event::PointerMoved(PointerEvent {
            position: at,
            button: MouseButton::None,
        }),
        Event::PointerPressed(pointer),
        Event::PointerReleased(pointer),
    ]
}

/// Press at the first point, move through the rest, release at the last.
pub fn drag(path: &[Point]) -> Vec<Event> {
    let Some((first, rest)) = path.split_first() else {
        return Vec::new();
    };
    let mut events = vec![Event::PointerPressed(PointerEvent {
        position: *first,
        button: MouseButton::Left,
    })];
    for p in rest {
        events.push(Event::PointerMoved(PointerEvent {
            position: *p,
            button: MouseButton::Left,
        }));
    }
    let last = rest.last().unwrap_or(first);
    events.push(Event::PointerReleased(PointerEvent {
        position: *last,
        button: MouseButton::Left,
    }));
    events
}
