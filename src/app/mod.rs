//! Application module - the Dragboard window state and its event wiring.
//!
//! - `state` - The DragBoard struct definition
//! - `lifecycle` - Construction from settings
//! - `pointer` - gpui mouse events forwarded to the board store

mod lifecycle;
mod pointer;
mod state;

pub use pointer::container_bounds_from;
pub use state::DragBoard;
