//! Move handling - keeps the dragged box under the pointer.
//!
//! ## Performance Notes
//!
//! Move fires at display rate during a drag. Idle moves exit before any
//! work, and each move recomputes the absolute position from the current
//! pointer, so coalesced events never accumulate error.

use crate::board::{BoardStore, RandomSource};
use crate::constants::CLAMP_RESERVE;
use crate::input::coords::CoordinateConverter;
use crate::profile_scope;
use crate::types::{ContainerBounds, Point};

impl<R: RandomSource> BoardStore<R> {
    /// Move the selected element to follow `pointer`, clamped to `container`.
    ///
    /// No-op without an active drag or without container metrics. Returns
    /// true when the element's position changed.
    pub fn handle_pointer_move(&mut self, pointer: Point, container: Option<ContainerBounds>) -> bool {
        profile_scope!("handle_pointer_move");

        let state = self.state();
        if state.selecting_id.is_none() {
            return false;
        }
        let Some((anchor, grab)) = state.drag_anchors() else {
            return false;
        };
        let Some(container) = container else {
            return false;
        };
        if !pointer.is_finite() {
            return false;
        }

        let pos = CoordinateConverter::drag_position(pointer, anchor, grab, &container);
        let pos = CoordinateConverter::clamp_to_container(pos, &container, CLAMP_RESERVE);
        if !pos.is_finite() {
            return false;
        }

        let unchanged = state.selected().is_some_and(|el| el.position() == pos);
        self.set_element_pos(pos);
        !unchanged
    }
}
