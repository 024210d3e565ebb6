//! Release handling - ends any drag.

use crate::board::{BoardStore, RandomSource};
use tracing::debug;

impl<R: RandomSource> BoardStore<R> {
    /// Clear the selection and drag anchors, whether or not a drag was active.
    ///
    /// Returns true when there was something to clear.
    pub fn handle_pointer_up(&mut self) -> bool {
        let state = self.state();
        let had_focus = state.selecting_id.is_some()
            || state.last_dragging_point.is_some()
            || state.element_relative_dragging_point.is_some();

        if let Some(id) = state.selecting_id.as_deref() {
            debug!(element_id = %id, "drag end");
        }
        self.clear_focus();
        had_focus
    }
}
