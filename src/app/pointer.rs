//! Pointer wiring - translates gpui mouse events into store calls.

use super::DragBoard;
use crate::input::PressEvent;
use crate::input::coords::CoordinateConverter;
use crate::types::{ContainerBounds, Point};
use gpui::*;

/// Convert gpui bounds to the container metrics the input handlers take
pub fn container_bounds_from(bounds: Bounds<Pixels>) -> ContainerBounds {
    ContainerBounds::new(
        f32::from(bounds.origin.x),
        f32::from(bounds.origin.y),
        f32::from(bounds.size.width),
        f32::from(bounds.size.height),
    )
}

fn to_point(pos: gpui::Point<Pixels>) -> Point {
    Point::new(f32::from(pos.x), f32::from(pos.y))
}

impl DragBoard {
    /// Press on the box with `element_id`
    pub fn on_box_mouse_down(
        &mut self,
        element_id: &str,
        event: &MouseDownEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        // Only the topmost box under the pointer takes the press
        cx.stop_propagation();

        let Some(container) = self.container_bounds else {
            return;
        };
        let Some(element) = self.store.state().element(element_id) else {
            return;
        };
        let target_origin = CoordinateConverter::container_to_screen(element.position(), &container);
        let press = PressEvent::new(element_id, target_origin, to_point(event.position));
        if self.store.handle_pointer_down(press) {
            cx.notify();
        }
    }

    pub fn on_mouse_move(
        &mut self,
        event: &MouseMoveEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if self
            .store
            .handle_pointer_move(to_point(event.position), self.container_bounds)
        {
            cx.notify();
        }
    }

    pub fn on_mouse_up(&mut self, _event: &MouseUpEvent, _window: &mut Window, cx: &mut Context<Self>) {
        if self.store.handle_pointer_up() {
            cx.notify();
        }
    }

    pub fn on_add_clicked(&mut self, _event: &ClickEvent, _window: &mut Window, cx: &mut Context<Self>) {
        self.store.create_element();
        cx.notify();
    }
}
