//! Rendering - a pure projection of the board state.
//!
//! - `panel` - selection label and the ADD button
//! - `board` - the bordered container and its boxes

mod board;
mod panel;
