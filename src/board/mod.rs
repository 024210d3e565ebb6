//! Board state store.
//!
//! Holds the ordered element list plus the transient drag/selection state.
//! State only changes through [`BoardAction`]s fed to [`reduce`], usually via
//! [`BoardStore::dispatch`].
//!
//! ## Modules
//!
//! - `state` - `BoardState` and its read-only projections
//! - `reducer` - the action enum and the pure transition function
//! - `random` - the random source used when creating elements
//! - `store` - owner of the current state and the random source

mod random;
mod reducer;
mod state;
mod store;

pub use random::RandomSource;
pub use reducer::{reduce, BoardAction};
pub use state::BoardState;
pub use store::BoardStore;
