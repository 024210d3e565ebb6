//! Board store - owns the current state and feeds actions through the reducer.

use super::{reduce, BoardAction, BoardState, RandomSource};
use crate::types::Point;
use rand::rngs::ThreadRng;

/// Single writer of the board state.
///
/// Callers only ever read `state()`; every change goes through `dispatch`.
pub struct BoardStore<R = ThreadRng> {
    state: BoardState,
    rng: R,
}

impl BoardStore<ThreadRng> {
    /// Empty board backed by the thread-local generator
    pub fn with_thread_rng() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl Default for BoardStore<ThreadRng> {
    fn default() -> Self {
        Self::with_thread_rng()
    }
}

impl<R: RandomSource> BoardStore<R> {
    pub fn new(rng: R) -> Self {
        Self::with_state(BoardState::default(), rng)
    }

    pub fn with_state(state: BoardState, rng: R) -> Self {
        Self { state, rng }
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn into_state(self) -> BoardState {
        self.state
    }

    pub fn dispatch(&mut self, action: BoardAction) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action, &mut self.rng);
    }

    pub fn create_element(&mut self) {
        self.dispatch(BoardAction::CreateElement);
    }

    pub fn select_element(&mut self, id: impl Into<String>) {
        self.dispatch(BoardAction::SelectElement { id: id.into() });
    }

    pub fn start_dragging(&mut self, rel_pos: Point, el_pos: Point) {
        self.dispatch(BoardAction::StartDragging { rel_pos, el_pos });
    }

    pub fn set_element_pos(&mut self, pos: Point) {
        self.dispatch(BoardAction::SetElementPos { pos });
    }

    pub fn clear_focus(&mut self) {
        self.dispatch(BoardAction::ClearFocus);
    }
}
