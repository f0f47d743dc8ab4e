use crate::{
    config::Locale,
    entities::{DecoratedBill, RawBill},
};

use super::formatter::{format_date, format_status};

pub(crate) struct BillDecorator {
    locale: Locale,
}

impl BillDecorator {
    pub(crate) fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Never fails: a bad date only costs the record its `formated_date`.
    pub(crate) fn decorate(&self, bill: RawBill) -> DecoratedBill {
        let formated_date = match format_date(&bill.date, self.locale) {
            Ok(d) => Some(d),
            Err(e) => {
                tracing::error!(bill_id = %bill.id, date = %bill.date, error = %e, "could not format bill date");
                None
            }
        };
        let status = format_status(&bill.status, self.locale);
        DecoratedBill {
            bill: RawBill { status, ..bill },
            formated_date,
        }
    }

    pub(crate) fn decorate_all(&self, bills: Vec<RawBill>) -> Vec<DecoratedBill> {
        bills.into_iter().map(|b| self.decorate(b)).collect()
    }
}
