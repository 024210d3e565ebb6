//! Control panel above the container - selection label and ADD button.

use crate::app::DragBoard;
use crate::constants::PANEL_WIDTH;
use gpui::*;
use gpui_component::ActiveTheme as _;

pub(super) fn render_panel(selecting_id: Option<&str>, cx: &Context<DragBoard>) -> Div {
    let fg = cx.theme().foreground;
    let muted_fg = cx.theme().muted_foreground;
    let border = cx.theme().border;
    let button_bg = cx.theme().background;
    let hover_bg = cx.theme().muted;

    div()
        .w(px(PANEL_WIDTH))
        .my(px(12.0))
        .flex()
        .items_center()
        .justify_between()
        .child(
            div()
                .text_color(fg)
                .child(format!("Selecting ID: {}", selecting_id.unwrap_or_default())),
        )
        .child(
            div()
                .id("add-element")
                .px(px(12.0))
                .py(px(6.0))
                .rounded(px(4.0))
                .border_1()
                .border_color(border)
                .bg(button_bg)
                .hover(|s| s.bg(hover_bg))
                .cursor_pointer()
                .text_size(px(14.0))
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(muted_fg)
                .child("ADD")
                .on_click(cx.listener(DragBoard::on_add_clicked)),
        )
}
