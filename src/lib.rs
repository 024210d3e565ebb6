//! Dragboard - colored boxes dragged around a bounded panel.
//!
//! The library holds the board store and the pointer handling; the binary
//! wraps them in a gpui window.

pub mod app;
pub mod board;
pub mod constants;
pub mod input;
pub mod perf;
pub mod render;
pub mod settings;
pub mod types;
