pub mod types;

pub use types::{Event, EventMask, KeyCode, MouseButton, PointerEvent, ScrollEvent, ScrollKind};

use easel_core::{Axis, Point};
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::{Key, PhysicalKey};

/// Translates winit window events into toolkit events.
///
/// winit reports button presses without a position, so the tracker keeps the
/// last cursor position and stamps it onto press/release events.
#[derive(Debug, Default, Clone)]
pub struct PointerTracker {
    cursor: Point,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> Point {
        self.cursor
    }

    pub fn translate(&mut self, event: &WindowEvent) -> Option<Event> {
        match event {
            WindowEvent::CloseRequested => Some(Event::Closed),
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Point::new(position.x.round() as i32, position.y.round() as i32);
                Some(Event::PointerMoved(PointerEvent {
                    position: self.cursor,
                    button: MouseButton::None,
                }))
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let pointer = PointerEvent {
                    position: self.cursor,
                    button: translate_button(*button),
                };
                match state {
                    ElementState::Pressed => Some(Event::PointerPressed(pointer)),
                    ElementState::Released => Some(Event::PointerReleased(pointer)),
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let (dx, dy) = match delta {
                    MouseScrollDelta::LineDelta(x, y) => (*x as f64, *y as f64),
                    MouseScrollDelta::PixelDelta(p) => (p.x, p.y),
                };
                wheel_event(dx, dy)
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let key = match &event.physical_key {
                    PhysicalKey::Code(code) => translate_keycode(*code),
                    PhysicalKey::Unidentified(_) => KeyCode::Other,
                };
                let key = match (&event.logical_key, key) {
                    (Key::Character(s), KeyCode::Other) => {
                        s.chars().next().map(KeyCode::Char).unwrap_or(KeyCode::Other)
                    }
                    (_, key) => key,
                };
                match event.state {
                    ElementState::Pressed => Some(Event::KeyPressed(key)),
                    ElementState::Released => Some(Event::KeyReleased(key)),
                }
            }
            _ => None,
        }
    }

    /// Text produced by a key press, if any. Control characters are dropped.
    pub fn text_input(&self, event: &WindowEvent) -> Option<Event> {
        match event {
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => event
                .text
                .as_ref()
                .and_then(|t| t.chars().next())
                .filter(|c| !c.is_control())
                .map(Event::Text),
            _ => None,
        }
    }
}

fn wheel_event(dx: f64, dy: f64) -> Option<Event> {
    let (axis, amount) = if dy.abs() >= dx.abs() {
        (Axis::Vertical, dy)
    } else {
        (Axis::Horizontal, dx)
    };
    if amount == 0.0 {
        return None;
    }
    // Positive wheel deltas move content toward the start.
    let kind = if amount > 0.0 { ScrollKind::Up } else { ScrollKind::Down };
    Some(Event::Scroll(ScrollEvent::step(kind, axis)))
}

fn translate_button(button: winit::event::MouseButton) -> MouseButton {
    match button {
        winit::event::MouseButton::Left => MouseButton::Left,
        winit::event::MouseButton::Right => MouseButton::Right,
        winit::event::MouseButton::Middle => MouseButton::Middle,
        _ => MouseButton::None,
    }
}

fn translate_keycode(code: winit::keyboard::KeyCode) -> KeyCode {
    use winit::keyboard::KeyCode as W;
    match code {
        W::ArrowLeft => KeyCode::ArrowLeft,
        W::ArrowRight => KeyCode::ArrowRight,
        W::ArrowUp => KeyCode::ArrowUp,
        W::ArrowDown => KeyCode::ArrowDown,
        W::PageUp => KeyCode::PageUp,
        W::PageDown => KeyCode::PageDown,
        W::Enter | W::NumpadEnter => KeyCode::Enter,
        W::Escape => KeyCode::Escape,
        W::Backspace => KeyCode::Backspace,
        W::Delete => KeyCode::Delete,
        W::Tab => KeyCode::Tab,
        W::Space => KeyCode::Space,
        _ => KeyCode::Other,
    }
}
