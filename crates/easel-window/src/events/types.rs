use bitflags::bitflags;
use easel_core::{Axis, Point};

bitflags! {
    /// Set of event kinds. Nodes use it both for what they consume and for
    /// what they forward to descendants.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct EventMask: u64 {
        const CLOSED          = 0b0000_0001;
        const POINTER_PRESS   = 0b0000_0010;
        const POINTER_RELEASE = 0b0000_0100;
        const POINTER_MOVE    = 0b0000_1000;
        const KEY_PRESS       = 0b0001_0000;
        const KEY_RELEASE     = 0b0010_0000;
        const SCROLL          = 0b0100_0000;
        const TEXT            = 0b1000_0000;

        const POINTER = Self::POINTER_PRESS.bits()
            | Self::POINTER_RELEASE.bits()
            | Self::POINTER_MOVE.bits();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseButton {
    #[default]
    None,
    Left,
    Right,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    PageUp,
    PageDown,
    Enter,
    Escape,
    Backspace,
    Delete,
    Tab,
    Space,
    Char(char),
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub position: Point,
    pub button: MouseButton,
}

impl PointerEvent {
    pub fn new(x: i32, y: i32, button: MouseButton) -> Self {
        Self {
            position: Point::new(x, y),
            button,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollKind {
    Up,
    Down,
    PageUp,
    PageDown,
    /// Absolute reposition to [`ScrollEvent::position`].
    Relocation,
}

/// Scroll request. `position` is a normalized fraction in `[0, 1]` and is
/// only meaningful for [`ScrollKind::Relocation`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollEvent {
    pub kind: ScrollKind,
    pub position: Option<f32>,
    pub axis: Axis,
}

impl ScrollEvent {
    pub fn step(kind: ScrollKind, axis: Axis) -> Self {
        Self {
            kind,
            position: None,
            axis,
        }
    }

    pub fn relocation(fraction: f32, axis: Axis) -> Self {
        Self {
            kind: ScrollKind::Relocation,
            position: Some(fraction),
            axis,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Closed,
    PointerPressed(PointerEvent),
    PointerReleased(PointerEvent),
    PointerMoved(PointerEvent),
    KeyPressed(KeyCode),
    KeyReleased(KeyCode),
    Scroll(ScrollEvent),
    Text(char),
}

impl Event {
    /// The single mask bit identifying this event's kind.
    pub fn kind(&self) -> EventMask {
        match self {
            Event::Closed => EventMask::CLOSED,
            Event::PointerPressed(_) => EventMask::POINTER_PRESS,
            Event::PointerReleased(_) => EventMask::POINTER_RELEASE,
            Event::PointerMoved(_) => EventMask::POINTER_MOVE,
            Event::KeyPressed(_) => EventMask::KEY_PRESS,
            Event::KeyReleased(_) => EventMask::KEY_RELEASE,
            Event::Scroll(_) => EventMask::SCROLL,
            Event::Text(_) => EventMask::TEXT,
        }
    }

    pub fn pointer(&self) -> Option<&PointerEvent> {
        match self {
            Event::PointerPressed(p) | Event::PointerReleased(p) | Event::PointerMoved(p) => Some(p),
            _ => None,
        }
    }

    /// Copy of a pointer event with its position shifted by `delta`; other
    /// events are returned unchanged.
    pub fn translated(&self, delta: Point) -> Event {
        let shift = |p: &PointerEvent| PointerEvent {
            position: p.position.offset(delta),
            button: p.button,
        };
        match self {
            Event::PointerPressed(p) => Event::PointerPressed(shift(p)),
            Event::PointerReleased(p) => Event::PointerReleased(shift(p)),
            Event::PointerMoved(p) => Event::PointerMoved(shift(p)),
            other => other.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_are_single_bits() {
        let events = [
            Event::Closed,
            Event::PointerPressed(PointerEvent::new(0, 0, MouseButton::Left)),
            Event::PointerReleased(PointerEvent::new(0, 0, MouseButton::Left)),
            Event::PointerMoved(PointerEvent::new(0, 0, MouseButton::None)),
            Event::KeyPressed(KeyCode::Enter),
            Event::KeyReleased(KeyCode::Enter),
            Event::Scroll(ScrollEvent::step(ScrollKind::Up, Axis::Vertical)),
            Event::Text('a'),
        ];
        let mut seen = EventMask::empty();
        for ev in &events {
            assert_eq!(ev.kind().bits().count_ones(), 1);
            assert!(!seen.intersects(ev.kind()), "duplicate kind for {ev:?}");
            seen |= ev.kind();
        }
        assert_eq!(seen, EventMask::all());
    }

    #[test]
    fn test_translate_only_moves_pointer_events() {
        let ev = Event::PointerMoved(PointerEvent::new(5, 5, MouseButton::None));
        assert_eq!(
            ev.translated(Point::new(-2, 3)).pointer().map(|p| p.position),
            Some(Point::new(3, 8))
        );
        let scroll = Event::Scroll(ScrollEvent::relocation(0.5, Axis::Horizontal));
        assert_eq!(scroll.translated(Point::new(1, 1)), scroll);
    }
}
