//! Application state - the DragBoard struct definition.

use crate::board::BoardStore;
use crate::settings::Settings;
use crate::types::ContainerBounds;

/// Root view of the window.
pub struct DragBoard {
    /// Elements and drag state; the only writer is the pointer wiring
    pub store: BoardStore,
    pub settings: Settings,
    /// Container box in window coordinates, captured on every paint.
    /// `None` until the container has been laid out once.
    pub container_bounds: Option<ContainerBounds>,
}
