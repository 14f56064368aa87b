//! easel-window: input event model and translation from the platform
//! windowing layer.

pub mod events;

pub use events::{
    Event, EventMask, KeyCode, MouseButton, PointerEvent, PointerTracker, ScrollEvent, ScrollKind,
};
