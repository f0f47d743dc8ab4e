use std::str::FromStr as _;

use chrono::NaiveDate;
use iso_currency::Currency;
use maud::{html, Markup};

use crate::{
    data::models::iso_date_model::ISODateModel,
    entities::{DecoratedBill, RawBill},
    presentation::utils::format_amount,
};

use super::{
    actions::actions_markup,
    status_pages::{error_page_markup, loading_page_markup},
    vertical_layout::{vertical_layout_markup, ActiveIcon},
};

/// What the bills page is showing.
#[derive(Debug, Clone, Copy)]
pub enum BillsPage<'a> {
    Loading,
    Error(&'a str),
    Data(&'a [DecoratedBill]),
}

pub fn bills_ui(page: BillsPage<'_>) -> String {
    let bills = match page {
        BillsPage::Loading => return loading_page_markup().into_string(),
        BillsPage::Error(message) => return error_page_markup(message).into_string(),
        BillsPage::Data(bills) => bills,
    };
    html! {
        div class="layout" {
            (vertical_layout_markup(120, ActiveIcon::Bills))
            div class="content" {
                div class="content-header" {
                    div class="content-title" { "Mes notes de frais" }
                    button type="button" data-testid="btn-new-bill" class="btn btn-primary" {
                        "Nouvelle note de frais"
                    }
                }
                div id="data-table" {
                    table id="example" class="table table-striped" style="width:100%" {
                        thead {
                            tr {
                                th { "Type" }
                                th { "Nom" }
                                th { "Date" }
                                th { "Montant" }
                                th { "Statut" }
                                th { "Actions" }
                            }
                        }
                        tbody data-testid="tbody" {
                            @for bill in newest_first(bills) {
                                (row(bill))
                            }
                        }
                    }
                }
            }
            (receipt_modal())
        }
    }
    .into_string()
}

/// Newest first. Bills whose date does not parse go last, in store order.
fn newest_first(bills: &[DecoratedBill]) -> Vec<&DecoratedBill> {
    let mut sorted: Vec<(Option<NaiveDate>, &DecoratedBill)> = bills
        .iter()
        .map(|b| (ISODateModel::from_str(&b.bill.date).ok().map(Into::into), b))
        .collect();
    sorted.sort_by(|(a, _), (b, _)| b.cmp(a));
    sorted.into_iter().map(|(_, b)| b).collect()
}

fn row(bill: &DecoratedBill) -> Markup {
    let b = &bill.bill;
    html! {
        tr {
            td { (RawBill::text(&b.bill_type).unwrap_or_default()) }
            td { (RawBill::text(&b.name).unwrap_or_default()) }
            td { (b.date) }
            td {
                @if let Some(amount) = b.amount_value() {
                    (format_amount(amount, Currency::EUR))
                }
            }
            td { (b.status) }
            td { (actions_markup(&RawBill::text(&b.file_url).unwrap_or_default())) }
        }
    }
}

fn receipt_modal() -> Markup {
    html! {
        div class="modal fade" id="modaleFile" data-testid="modaleFile" tabindex="-1" role="dialog"
            aria-labelledby="exampleModalCenterTitle" aria-hidden="true" {
            div class="modal-dialog modal-dialog-centered modal-lg" role="document" {
                div class="modal-content" {
                    div class="modal-header" {
                        h5 class="modal-title" id="exampleModalLongTitle" { "Justificatif" }
                        button type="button" class="close" data-dismiss="modal" aria-label="Close" {
                            span aria-hidden="true" { "×" }
                        }
                    }
                    div class="modal-body" {}
                }
            }
        }
    }
}
