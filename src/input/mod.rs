//! Pointer input handling for the board.
//!
//! Translates raw press/move/release signals into store actions. The handlers
//! are `BoardStore` methods that take the container metrics as explicit
//! arguments; nothing here reads ambient UI state.
//!
//! ## Architecture
//!
//! `DragPhase` is the explicit state machine view of the store: `Idle` until
//! a press lands on a known element, `Dragging` until the next release.
//!
//! ## Modules
//!
//! - `state` - Drag phase enum derived from the board state
//! - `coords` - Drag offset translation and container clamping
//! - `mouse_down` - Press handling (select + start drag)
//! - `drag` - Move handling (position updates)
//! - `mouse_up` - Release handling (end drag)

pub mod coords;
mod drag;
mod mouse_down;
mod mouse_up;
mod state;

pub use mouse_down::PressEvent;
pub use state::DragPhase;
