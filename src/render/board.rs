//! Board rendering - the container, its boxes, and the root event surface.
//!
//! Boxes are drawn in `elements` order, so the most recently selected box
//! ends up on top. Move and release are observed on the window-filling root
//! so a drag keeps tracking when the pointer leaves the container.

use super::panel::render_panel;
use crate::app::{container_bounds_from, DragBoard};
use crate::constants::BOX_SIZE;
use crate::input::DragPhase;
use crate::profile_scope;
use crate::types::{BoxColor, Element};
use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::ActiveTheme as _;

impl Render for DragBoard {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        profile_scope!("render_board");

        let state = self.store.state();
        let phase = DragPhase::from_board(state);
        let selecting_id = state.selecting_id.clone();

        div()
            .id("dragboard-root")
            .size_full()
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .bg(cx.theme().background)
            .on_mouse_move(cx.listener(Self::on_mouse_move))
            .on_mouse_up(MouseButton::Left, cx.listener(Self::on_mouse_up))
            .child(render_panel(selecting_id.as_deref(), cx))
            .child(self.render_container(&phase, cx))
    }
}

impl DragBoard {
    fn render_container(&self, phase: &DragPhase, cx: &Context<Self>) -> Div {
        let view = cx.entity().downgrade();
        let boxes: Vec<Stateful<Div>> = self
            .store
            .state()
            .elements
            .iter()
            .map(|el| render_box(el, phase.dragged_element_id() == Some(el.id.as_str()), cx))
            .collect();

        div()
            .relative()
            .w(px(self.settings.container_width))
            .h(px(self.settings.container_height))
            .border_1()
            .border_color(cx.theme().border)
            .child(
                // Records the container's window-space bounds after layout
                canvas(
                    move |bounds, _window, cx| {
                        let _ = view.update(cx, |this, _| {
                            this.container_bounds = Some(container_bounds_from(bounds));
                        });
                    },
                    |_, _, _, _| {},
                )
                .absolute()
                .size_full(),
            )
            .children(boxes)
    }
}

fn render_box(element: &Element, dragging: bool, cx: &Context<DragBoard>) -> Stateful<Div> {
    let color = BoxColor::for_id(&element.id);
    let id = element.id.clone();

    div()
        .id(ElementId::Name(format!("box-{}", element.id).into()))
        .absolute()
        .left(px(element.x))
        .top(px(element.y))
        .w(px(BOX_SIZE))
        .h(px(BOX_SIZE))
        .rounded(px(4.0))
        .border_1()
        .border_color(rgb(color.border))
        .bg(rgb(color.fill))
        .when(dragging, |s| s.shadow_md())
        .on_mouse_down(
            MouseButton::Left,
            cx.listener(move |this, event: &MouseDownEvent, window, cx| {
                this.on_box_mouse_down(&id, event, window, cx);
            }),
        )
}
