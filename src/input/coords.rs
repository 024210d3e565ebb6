//! Coordinate conversion utilities for drag interactions.
//!
//! Screen coordinates come from pointer events and bounding boxes; element
//! positions are relative to the container's top-left corner.

use crate::types::{ContainerBounds, Point};

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert a screen position to container-relative coordinates
    #[inline]
    pub fn screen_to_container(screen_pos: Point, container: &ContainerBounds) -> Point {
        Point::new(screen_pos.x - container.left, screen_pos.y - container.top)
    }

    /// Convert a container-relative position to screen coordinates
    #[inline]
    pub fn container_to_screen(pos: Point, container: &ContainerBounds) -> Point {
        Point::new(pos.x + container.left, pos.y + container.top)
    }

    /// Unclamped element position for the pointer at `pointer`.
    ///
    /// `drag_anchor` is the element's screen top-left and `grab_point` the
    /// pointer's screen position, both captured at drag start. Their
    /// difference stays constant, so moving the pointer by `(dx, dy)` moves
    /// the element by exactly `(dx, dy)`.
    #[inline]
    pub fn drag_position(
        pointer: Point,
        drag_anchor: Point,
        grab_point: Point,
        container: &ContainerBounds,
    ) -> Point {
        let grab_offset = Point::new(grab_point.x - drag_anchor.x, grab_point.y - drag_anchor.y);
        Self::screen_to_container(
            Point::new(pointer.x - grab_offset.x, pointer.y - grab_offset.y),
            container,
        )
    }

    /// Keep `pos` inside `[0, width - reserve] x [0, height - reserve]`.
    ///
    /// A container smaller than `reserve` pins the axis at 0.
    #[inline]
    pub fn clamp_to_container(pos: Point, container: &ContainerBounds, reserve: f32) -> Point {
        let max_x = (container.width - reserve).max(0.0);
        let max_y = (container.height - reserve).max(0.0);
        Point::new(pos.x.clamp(0.0, max_x), pos.y.clamp(0.0, max_y))
    }
}
