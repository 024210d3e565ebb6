//! Drag phase - the interaction state machine over the board state.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging        (press on a known element)
//! Dragging -> Dragging    (move - position updates only)
//! Any -> Idle             (release)
//! ```
//!
//! Moves while `Idle` are no-ops. There is no cancel besides release.

use crate::board::BoardState;
use crate::types::Point;

/// Current interaction mode, derived from [`BoardState`].
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragPhase {
    /// Nothing selected or no drag anchors recorded
    #[default]
    Idle,

    /// A box follows the pointer
    Dragging {
        /// Element under the pointer at press time
        element_id: String,
        /// Pointer position minus element anchor, fixed for the whole drag
        grab_offset: Point,
    },
}

impl DragPhase {
    pub fn from_board(state: &BoardState) -> Self {
        match (state.selecting_id.as_ref(), state.drag_anchors()) {
            (Some(id), Some((anchor, grab))) => Self::Dragging {
                element_id: id.clone(),
                grab_offset: Point::new(grab.x - anchor.x, grab.y - anchor.y),
            },
            _ => Self::Idle,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Id of the element being dragged, if any
    pub fn dragged_element_id(&self) -> Option<&str> {
        match self {
            Self::Dragging { element_id, .. } => Some(element_id),
            Self::Idle => None,
        }
    }

    pub fn grab_offset(&self) -> Option<Point> {
        match self {
            Self::Dragging { grab_offset, .. } => Some(*grab_offset),
            Self::Idle => None,
        }
    }
}
