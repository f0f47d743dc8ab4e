use std::str::FromStr as _;

use chrono::{Datelike as _, NaiveDate};
use fractic_server_error::ServerError;

use crate::{
    config::Locale,
    data::models::{bill_status_model::BillStatusModel, iso_date_model::ISODateModel},
    entities::BillStatus,
};

const MONTHS_FR: [&str; 12] = [
    "Jan", "Fév", "Mar", "Avr", "Mai", "Jui", "Jui", "Aoû", "Sep", "Oct", "Nov", "Déc",
];
const MONTHS_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Short display date, e.g. `2004-04-04` -> `4 Avr. 04`.
///
/// The day has no leading zero and the year keeps its last two digits. In
/// French, June and July share the `Jui` abbreviation (the first three letters
/// of `juin` and `juil.`).
pub fn format_date(raw: &str, locale: Locale) -> Result<String, ServerError> {
    let date: NaiveDate = ISODateModel::from_str(raw)?.into();
    let months = match locale {
        Locale::Fr => &MONTHS_FR,
        Locale::En => &MONTHS_EN,
    };
    Ok(format!(
        "{} {}. {:02}",
        date.day(),
        months[date.month0() as usize],
        date.year().rem_euclid(100)
    ))
}

/// Display label of a raw status code. Unknown codes come back unchanged.
pub fn format_status(code: &str, locale: Locale) -> String {
    match BillStatusModel::from_str(code) {
        Ok(model) => status_label(model.into(), locale).to_string(),
        Err(()) => {
            tracing::warn!(status = code, "unknown bill status, displaying raw code");
            code.to_string()
        }
    }
}

pub fn status_label(status: BillStatus, locale: Locale) -> &'static str {
    match (locale, status) {
        (Locale::Fr, BillStatus::Pending) => "En attente",
        (Locale::Fr, BillStatus::Accepted) => "Accepté",
        (Locale::Fr, BillStatus::Refused) => "Refused",
        (Locale::En, BillStatus::Pending) => "Pending",
        (Locale::En, BillStatus::Accepted) => "Accepted",
        (Locale::En, BillStatus::Refused) => "Refused",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_french_short_dates() {
        assert_eq!(format_date("2004-04-04", Locale::Fr).unwrap(), "4 Avr. 04");
        assert_eq!(format_date("2001-01-01", Locale::Fr).unwrap(), "1 Jan. 01");
        assert_eq!(format_date("2003-03-03", Locale::Fr).unwrap(), "3 Mar. 03");
        assert_eq!(format_date("2002-02-02", Locale::Fr).unwrap(), "2 Fév. 02");
        assert_eq!(format_date("2021-12-25", Locale::Fr).unwrap(), "25 Déc. 21");
        assert_eq!(format_date("2021-08-15", Locale::Fr).unwrap(), "15 Aoû. 21");
    }

    #[test]
    fn formats_english_short_dates() {
        assert_eq!(format_date("2002-02-02", Locale::En).unwrap(), "2 Feb. 02");
        assert_eq!(format_date("1999-07-31", Locale::En).unwrap(), "31 Jul. 99");
    }

    #[test]
    fn same_input_same_output() {
        let a = format_date("2022-06-09", Locale::Fr).unwrap();
        let b = format_date("2022-06-09", Locale::Fr).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, "9 Jui. 22");
    }

    #[test]
    fn unparsable_dates_fail() {
        assert!(format_date("wrong_date_example", Locale::Fr).is_err());
        assert!(format_date("04/04/2004", Locale::Fr).is_err());
    }

    #[test]
    fn known_statuses_get_labels() {
        assert_eq!(format_status("pending", Locale::Fr), "En attente");
        assert_eq!(format_status("accepted", Locale::Fr), "Accepté");
        assert_eq!(format_status("refused", Locale::Fr), "Refused");
        assert_eq!(format_status("pending", Locale::En), "Pending");
        assert_eq!(format_status("accepted", Locale::En), "Accepted");
    }

    #[test]
    fn unknown_statuses_pass_through() {
        assert_eq!(format_status("archived", Locale::Fr), "archived");
        assert_eq!(format_status("", Locale::En), "");
        assert_eq!(format_status("Pending", Locale::En), "Pending");
    }
}
