use std::str::FromStr;

use chrono::NaiveDate;
use fractic_server_error::ServerError;

use crate::errors::InvalidBillDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct ISODateModel(NaiveDate);

impl FromStr for ISODateModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let d = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_err(|e| InvalidBillDate::with_debug(s, &e))?;
        Ok(ISODateModel(d))
    }
}

impl From<ISODateModel> for NaiveDate {
    fn from(model: ISODateModel) -> Self {
        model.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_calendar_dates() {
        let d: NaiveDate = ISODateModel::from_str("2004-04-04").unwrap().into();
        assert_eq!(d, NaiveDate::from_ymd_opt(2004, 4, 4).unwrap());
    }

    #[test]
    fn rejects_garbage_and_impossible_dates() {
        assert!(ISODateModel::from_str("wrong_date_example").is_err());
        assert!(ISODateModel::from_str("2004-02-30").is_err());
        assert!(ISODateModel::from_str("").is_err());
    }

    #[test]
    fn orders_chronologically() {
        let a = ISODateModel::from_str("2001-01-01").unwrap();
        let b = ISODateModel::from_str("2003-03-03").unwrap();
        assert!(a < b);
    }
}
