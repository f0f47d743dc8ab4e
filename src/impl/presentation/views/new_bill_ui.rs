use maud::html;

use super::vertical_layout::{vertical_layout_markup, ActiveIcon};

const EXPENSE_TYPES: [&str; 7] = [
    "Transports",
    "Restaurants et bars",
    "Hôtel et logement",
    "Services en ligne",
    "IT et électronique",
    "Equipement et matériel",
    "Fournitures de bureau",
];

pub fn new_bill_ui() -> String {
    html! {
        div class="layout" {
            (vertical_layout_markup(120, ActiveIcon::NewBill))
            div class="content" {
                div class="content-header" {
                    div class="content-title" { "Envoyer une note de frais" }
                }
                div class="form-newbill-container content-inner" {
                    form data-testid="form-new-bill" {
                        div class="row" {
                            div class="col-md-6" {
                                div class="col-half" {
                                    label for="expense-type" class="bold-label" { "Type de dépense" }
                                    select required class="form-control blue-border" data-testid="expense-type" {
                                        @for expense_type in EXPENSE_TYPES {
                                            option { (expense_type) }
                                        }
                                    }
                                }
                                div class="col-half" {
                                    label for="expense-name" class="bold-label" { "Nom de la dépense" }
                                    input type="text" class="form-control blue-border" data-testid="expense-name" placeholder="Vol Paris Londres";
                                }
                                div class="col-half" {
                                    label for="datepicker" class="bold-label" { "Date" }
                                    input required type="date" class="form-control blue-border" data-testid="datepicker";
                                }
                                div class="col-half" {
                                    label for="amount" class="bold-label" { "Montant TTC" }
                                    input required type="number" class="form-control blue-border input-icon input-icon-right" data-testid="amount" placeholder="348";
                                }
                                div class="col-half-row" {
                                    div class="flex-col" {
                                        label for="vat" class="bold-label" { "TVA" }
                                        input type="number" class="form-control blue-border" data-testid="vat" placeholder="70";
                                    }
                                    div class="flex-col" {
                                        input required type="number" class="form-control blue-border" data-testid="pct" placeholder="20";
                                    }
                                }
                            }
                            div class="col-md-6" {
                                div class="col-half" {
                                    label for="commentary" class="bold-label" { "Commentaire" }
                                    textarea class="form-control blue-border" data-testid="commentary" rows="3" {}
                                }
                                div class="col-half" {
                                    label for="file" class="bold-label" { "Justificatif" }
                                    input required type="file" accept=".jpg,.jpeg,.png" class="form-control blue-border" data-testid="file";
                                }
                            }
                        }
                        div class="row" {
                            div class="col-md-6" {
                                div class="col-half" {
                                    button type="submit" id="btn-send-bill" class="btn btn-primary" { "Envoyer" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
    .into_string()
}
