//! easel-widgets: the retained-mode widget tree.
//!
//! Nodes live in an arena ([`Tree`]) and carry two event masks: the kinds a
//! node consumes and the kinds it forwards to descendants. Routing visits
//! children before the node itself, and a [`ModalManager`] can redirect
//! everything to a single modal subtree.

pub mod app;
pub mod elements;
pub mod event_handler;
pub mod event_router;
pub mod paint;
pub mod tree;
pub mod zones;

pub use app::App;
pub use elements::{
    Button, ControlStyle, Dialog, Frame, Group, Interaction, ModalManager, Panel, Scrollbar,
    Signals, Slider, TextView,
};
pub use event_handler::{Children, EventCtx, EventResult, Widget};
pub use event_router::MAX_DISPATCH_DEPTH;
pub use paint::{PaintCanvas, Tool, ToolRegistry};
pub use tree::{NodeId, Tree, TreeError};
pub use zones::{ScrollArea, ScrollBars, Viewport};
