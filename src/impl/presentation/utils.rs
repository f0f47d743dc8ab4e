use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};

/// Standard number decimal places for the given currency
/// (ex. JPY = 0, EUR = 2).
fn decimal_places(currency: Currency) -> u32 {
    currency.exponent().map(u32::from).unwrap_or(0)
}

/// Format a bill amount with thousands separators and the currency symbol.
///
/// Whole amounts are shown without decimals (bills are entered as integers);
/// anything else is rounded once to the currency's standard number of decimal
/// places. Uses the en locale for separators regardless of the display locale.
pub(crate) fn format_amount(amount: f64, currency: Currency) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let abs = amount.abs();
    if abs.fract() == 0.0 {
        let integer_part = (abs as i64).to_formatted_string(&Locale::en);
        return format!("{}{} {}", sign, integer_part, currency.symbol());
    }
    let decimal_places = decimal_places(currency);
    let scale = 10_i64.pow(decimal_places);
    let scaled = (abs * scale as f64).round() as i64;
    let integer_part = (scaled / scale).to_formatted_string(&Locale::en);
    if decimal_places == 0 {
        return format!("{}{} {}", sign, integer_part, currency.symbol());
    }
    format!(
        "{}{}.{:0width$} {}",
        sign,
        integer_part,
        scaled % scale,
        currency.symbol(),
        width = decimal_places as usize,
    )
}
