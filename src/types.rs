//! Core types for the Dragboard canvas.
//!
//! Plain data shared by the store, the pointer handler and the render layer.
//! Coordinates are `f32` pixels; element positions are relative to the
//! container's top-left corner, pointer and bounding-box coordinates are
//! window (screen) coordinates.

use serde::{Deserialize, Serialize};

// ============================================================================
// Geometry
// ============================================================================

/// A 2D coordinate in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// Screen-space bounding box of the container the boxes live in.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContainerBounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ContainerBounds {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Top-left corner in screen coordinates
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }
}

// ============================================================================
// Elements
// ============================================================================

/// A draggable box. `id` never changes after creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: String,
    pub x: f32,
    pub y: f32,
}

impl Element {
    pub fn new(id: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            id: id.into(),
            x,
            y,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn set_position(&mut self, pos: Point) {
        self.x = pos.x;
        self.y = pos.y;
    }
}

// ============================================================================
// Colors
// ============================================================================

/// Fill and border color of a box, as `0xRRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoxColor {
    pub fill: u32,
    pub border: u32,
}

/// Red, blue, green, yellow, indigo, pink
pub const BOX_PALETTE: [BoxColor; 6] = [
    BoxColor { fill: 0xfecaca, border: 0xef4444 },
    BoxColor { fill: 0xbfdbfe, border: 0x3b82f6 },
    BoxColor { fill: 0xbbf7d0, border: 0x22c55e },
    BoxColor { fill: 0xfef08a, border: 0xeab308 },
    BoxColor { fill: 0xc7d2fe, border: 0x6366f1 },
    BoxColor { fill: 0xfbcfe8, border: 0xec4899 },
];

impl BoxColor {
    /// Picks a palette entry from the last two hex digits of the id.
    pub fn for_id(id: &str) -> Self {
        let suffix = id.get(id.len().saturating_sub(2)..).unwrap_or("");
        let n = u8::from_str_radix(suffix, 16).unwrap_or(0) as usize;
        BOX_PALETTE[n % BOX_PALETTE.len()]
    }
}
