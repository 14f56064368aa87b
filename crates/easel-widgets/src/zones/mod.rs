//! Scrollable regions.

pub mod scroll_area;
pub mod viewport;

pub use scroll_area::{ScrollArea, ScrollBars};
pub use viewport::Viewport;
