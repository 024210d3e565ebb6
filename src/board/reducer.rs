//! Board actions and the pure transition function.

use super::{BoardState, RandomSource};
use crate::constants::{SPAWN_MAX, SPAWN_MIN};
use crate::types::{Element, Point};
use tracing::debug;

/// Every way the board state can change.
#[derive(Clone, Debug, PartialEq)]
pub enum BoardAction {
    /// Append a new element at a random position in the spawn range
    CreateElement,
    /// Select an element and move it to the top of the z-order
    SelectElement { id: String },
    /// Record the element's screen anchor and the pointer position
    StartDragging { rel_pos: Point, el_pos: Point },
    /// Move the selected element
    SetElementPos { pos: Point },
    /// Drop the selection and the drag anchors
    ClearFocus,
}

/// Apply `action` to `state` and return the resulting state.
///
/// Total over every input: actions that cannot apply (unknown id, no
/// selection) return the state unchanged.
pub fn reduce<R: RandomSource + ?Sized>(
    mut state: BoardState,
    action: BoardAction,
    rng: &mut R,
) -> BoardState {
    match action {
        BoardAction::CreateElement => {
            let x = rng.int_between(SPAWN_MIN, SPAWN_MAX) as f32;
            let y = rng.int_between(SPAWN_MIN, SPAWN_MAX) as f32;
            let element = Element::new(rng.element_id(), x, y);
            debug!(id = %element.id, x, y, "create element");
            state.elements.push(element);
        }
        BoardAction::SelectElement { id } => {
            let Some(index) = state.index_of(&id) else {
                debug!(%id, "select ignored: no such element");
                return state;
            };
            let element = state.elements.remove(index);
            state.elements.push(element);
            state.selecting_id = Some(id);
        }
        BoardAction::StartDragging { rel_pos, el_pos } => {
            state.last_dragging_point = Some(rel_pos);
            state.element_relative_dragging_point = Some(el_pos);
        }
        BoardAction::SetElementPos { pos } => {
            let Some(selected) = state.selecting_id.as_deref() else {
                return state;
            };
            if let Some(element) = state.elements.iter_mut().find(|el| el.id == selected) {
                element.set_position(pos);
            }
        }
        BoardAction::ClearFocus => {
            state.selecting_id = None;
            state.last_dragging_point = None;
            state.element_relative_dragging_point = None;
        }
    }
    state
}
