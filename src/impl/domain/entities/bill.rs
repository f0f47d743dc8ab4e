use std::{borrow::Cow, collections::BTreeMap};

use serde::Deserializer;
use serde_json::Value;

/// A bill as returned by the store.
///
/// Only `id`, `date` and `status` carry meaning for the listing pipeline. They
/// are read leniently: `null` becomes an empty string and other scalars their
/// JSON text, so an odd record degrades instead of failing the whole list. The
/// remaining fields are passed through as whatever JSON the store holds, and
/// keys the crate does not know about are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, serde_derive::Deserialize, serde_derive::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBill {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub bill_type: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pct: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commentary: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_admin: Option<Value>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// A bill enriched with display-ready fields.
///
/// `bill.status` holds the display label, not the raw code. `formated_date`
/// is absent when the raw date could not be parsed, in which case `bill.date`
/// is the untouched raw value.
#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
pub struct DecoratedBill {
    #[serde(flatten)]
    pub bill: RawBill,
    #[serde(rename = "formatedDate", skip_serializing_if = "Option::is_none")]
    pub formated_date: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BillStatus {
    Pending,
    Accepted,
    Refused,
}

/// Raw values of the new bill form, as typed by the employee.
#[derive(Debug, Clone, Default)]
pub struct NewBillForm {
    pub expense_type: String,
    pub expense_name: String,
    pub date: String,
    pub amount: String,
    pub vat: String,
    pub pct: String,
    pub commentary: String,
}

// --

impl RawBill {
    /// Text of a pass-through field. Strings as is, numbers and booleans as
    /// their JSON text; `null`, arrays and objects have no text.
    pub fn text(field: &Option<Value>) -> Option<Cow<'_, str>> {
        match field.as_ref()? {
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            v @ (Value::Number(_) | Value::Bool(_)) => Some(Cow::Owned(v.to_string())),
            _ => None,
        }
    }

    /// Amount as a number, whether the store kept it as a number or a numeric
    /// string.
    pub fn amount_value(&self) -> Option<f64> {
        match self.amount.as_ref()? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl DecoratedBill {
    pub fn id(&self) -> &str {
        &self.bill.id
    }
}

impl BillStatus {
    pub fn code(&self) -> &'static str {
        match self {
            BillStatus::Pending => "pending",
            BillStatus::Accepted => "accepted",
            BillStatus::Refused => "refused",
        }
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match <Value as serde::Deserialize>::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}
