use maud::{html, Markup, PreEscaped};

use super::icons::{DOWNLOAD_BLUE_ICON, EYE_BLUE_ICON};

/// Preview and download icons shown on each bill row.
pub fn actions(bill_url: &str) -> String {
    actions_markup(bill_url).into_string()
}

pub(crate) fn actions_markup(bill_url: &str) -> Markup {
    html! {
        div class="icon-actions" {
            div id="eye" data-testid="icon-eye" data-bill-url=(bill_url) {
                (PreEscaped(EYE_BLUE_ICON))
            }
            div id="download" data-testid="icon-download" data-bill-url=(bill_url) {
                (PreEscaped(DOWNLOAD_BLUE_ICON))
            }
        }
    }
}
