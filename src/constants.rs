//! Application-wide constants.
//!
//! Centralizes magic numbers and layout values to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Layout Constants
// ============================================================================

/// Edge length of a draggable box in pixels
pub const BOX_SIZE: f32 = 32.0;

/// Space kept free at the far edges of the container while dragging.
/// One pixel more than the box so it never touches the border.
pub const CLAMP_RESERVE: f32 = BOX_SIZE + 1.0;

/// Default container width in pixels
pub const CONTAINER_WIDTH: f32 = 384.0;

/// Default container height in pixels
pub const CONTAINER_HEIGHT: f32 = 384.0;

/// Width of the control panel above the container
pub const PANEL_WIDTH: f32 = 384.0;

/// Default window size
pub const WINDOW_SIZE: (f32, f32) = (640.0, 560.0);

// ============================================================================
// Element Creation
// ============================================================================

/// New elements spawn with both coordinates in `[SPAWN_MIN, SPAWN_MAX]`
pub const SPAWN_MIN: i32 = 0;

/// Upper bound (inclusive) for spawn coordinates
pub const SPAWN_MAX: i32 = 200;

/// Number of hex characters in a generated element id
pub const ELEMENT_ID_LEN: usize = 8;
