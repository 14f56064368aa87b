//! Hover/press state machine shared by clickable controls.

use bitflags::bitflags;
use easel_core::Color;
use easel_window::Event;

use super::frame::{ControlStyle, Frame};

bitflags! {
    /// Transitions produced by a single pointer event, reported in flag
    /// order.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Signals: u8 {
        const PRESS       = 0b0000_0001;
        const DRAG        = 0b0000_0010;
        const HOVER_ENTER = 0b0000_0100;
        const HOVER_EXIT  = 0b0000_1000;
        const CLICK       = 0b0001_0000;
        const RELEASE     = 0b0010_0000;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Interaction {
    hovered: bool,
    pressed: bool,
}

impl Interaction {
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Advance on a pointer event tested against `frame`. Other events
    /// produce no signals.
    pub fn update(&mut self, event: &Event, frame: &Frame) -> Signals {
        let mut signals = Signals::empty();
        let Some(pointer) = event.pointer() else {
            return signals;
        };
        let inside = frame.hit_test(pointer.position);

        match event {
            Event::PointerPressed(_) if inside && !self.pressed => {
                self.pressed = true;
                signals |= Signals::PRESS;
                if !self.hovered {
                    self.hovered = true;
                    signals |= Signals::HOVER_ENTER;
                }
            }
            Event::PointerMoved(_) => {
                if self.pressed {
                    signals |= Signals::DRAG;
                }
                if inside && !self.hovered {
                    self.hovered = true;
                    signals |= Signals::HOVER_ENTER;
                } else if !inside && self.hovered {
                    self.hovered = false;
                    signals |= Signals::HOVER_EXIT;
                }
            }
            Event::PointerReleased(_) if self.pressed => {
                self.pressed = false;
                if inside {
                    signals |= Signals::CLICK;
                }
                signals |= Signals::RELEASE;
            }
            _ => {}
        }
        signals
    }

    /// Background for the current state: pressed, then hovered, then idle.
    pub fn background(&self, style: &ControlStyle) -> Color {
        if self.pressed {
            style.press
        } else if self.hovered {
            style.hover
        } else {
            style.background
        }
    }
}
