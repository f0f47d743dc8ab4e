use std::str::FromStr;

use fractic_server_error::ServerError;

use crate::errors::InvalidAmount;

/// Integer form field (amount, pct). Like the form's number inputs, any
/// fractional part is dropped rather than rounded.
#[derive(Debug)]
pub(crate) struct FormNumberModel(pub i64);

impl FromStr for FormNumberModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim().replace(',', ".");
        let value = raw
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| InvalidAmount::new(s))?;
        Ok(FormNumberModel(value.trunc() as i64))
    }
}

impl From<FormNumberModel> for i64 {
    fn from(model: FormNumberModel) -> Self {
        model.0
    }
}
