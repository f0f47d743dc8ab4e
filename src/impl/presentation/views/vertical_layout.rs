use maud::{html, Markup, PreEscaped};

use super::icons::{DISCONNECT_ICON, MAIL_ICON, WINDOW_ICON};

/// Which navigation icon is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveIcon {
    Bills,
    NewBill,
}

pub fn vertical_layout(height_vh: u32, active: ActiveIcon) -> String {
    vertical_layout_markup(height_vh, active).into_string()
}

pub(crate) fn vertical_layout_markup(height_vh: u32, active: ActiveIcon) -> Markup {
    let active_class = |icon: ActiveIcon| (icon == active).then_some("active-icon");
    html! {
        div class="vertical-navbar" style=(format!("height: {height_vh}vh;")) {
            div class="layout-title" {
                span class="layout-title-first" { "Bill" }
                span class="layout-title-second" { "ed" }
            }
            div id="layout-icon1" data-testid="icon-window" class=[active_class(ActiveIcon::Bills)] {
                (PreEscaped(WINDOW_ICON))
            }
            div id="layout-icon2" data-testid="icon-mail" class=[active_class(ActiveIcon::NewBill)] {
                (PreEscaped(MAIL_ICON))
            }
            div id="layout-disconnect" data-testid="layout-disconnect" {
                (PreEscaped(DISCONNECT_ICON))
            }
        }
    }
}
