//! Widgets that live in the node tree.
//! Controls compose a [`Frame`] for geometry with an [`Interaction`] for
//! hover and press state.

pub mod button;
pub mod container;
pub mod frame;
pub mod interaction;
pub mod modal;
pub mod scrollbar;
pub mod slider;
pub mod text_view;

pub use button::Button;
pub use container::{Group, Panel};
pub use frame::{ControlStyle, Frame};
pub use interaction::{Interaction, Signals};
pub use modal::{Dialog, ModalManager};
pub use scrollbar::{Scrollbar, Track};
pub use slider::Slider;
pub use text_view::TextView;
