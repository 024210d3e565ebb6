//! Unit tests for Dragboard.

mod coords_tests;
mod settings_tests;
mod snapshot_tests;
