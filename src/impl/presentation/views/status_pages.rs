use maud::{html, Markup};

use super::vertical_layout::{vertical_layout_markup, ActiveIcon};

pub fn loading_page() -> String {
    loading_page_markup().into_string()
}

pub fn error_page(message: &str) -> String {
    error_page_markup(message).into_string()
}

pub(crate) fn loading_page_markup() -> Markup {
    html! {
        div class="layout" {
            (vertical_layout_markup(120, ActiveIcon::Bills))
            div class="content" id="loading" { "Loading..." }
        }
    }
}

pub(crate) fn error_page_markup(message: &str) -> Markup {
    html! {
        div class="layout" {
            (vertical_layout_markup(120, ActiveIcon::Bills))
            div class="content" {
                div class="content-header" {
                    div class="content-title" { "Erreur" }
                }
                div data-testid="error-message" { (message) }
            }
        }
    }
}
