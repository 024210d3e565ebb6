//! Press handling - selection and drag start.

use crate::board::{BoardStore, RandomSource};
use crate::profile_scope;
use crate::types::Point;
use tracing::debug;

/// What the render layer reports when a box is pressed.
#[derive(Clone, Debug, PartialEq)]
pub struct PressEvent {
    /// Element under the pointer; `None` when the target carries no element
    pub element_id: Option<String>,
    /// Screen position of the pressed element's top-left corner
    pub target_origin: Point,
    /// Screen position of the pointer
    pub pointer: Point,
}

impl PressEvent {
    pub fn new(element_id: impl Into<String>, target_origin: Point, pointer: Point) -> Self {
        Self {
            element_id: Some(element_id.into()),
            target_origin,
            pointer,
        }
    }
}

impl<R: RandomSource> BoardStore<R> {
    /// Select the pressed element and record the drag anchors.
    ///
    /// Returns true when the state changed.
    pub fn handle_pointer_down(&mut self, event: PressEvent) -> bool {
        profile_scope!("handle_pointer_down");

        let Some(element_id) = event.element_id else {
            return false;
        };
        if !self.state().contains(&element_id) {
            debug!(%element_id, "press ignored: unknown element");
            return false;
        }
        if !event.target_origin.is_finite() || !event.pointer.is_finite() {
            debug!(%element_id, "press ignored: non-finite coordinates");
            return false;
        }

        debug!(%element_id, "drag start");
        self.select_element(element_id);
        self.start_dragging(event.target_origin, event.pointer);
        true
    }
}
