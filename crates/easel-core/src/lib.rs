//! easel-core: geometry, color and the drawing-surface contract shared by
//! the widget toolkit.

mod backend;
mod color;
mod display_list;
mod painter;
mod scene;

pub use backend::*;
pub use color::*;
pub use display_list::*;
pub use painter::*;
pub use scene::*;
