//! Display formatting for money and percentages.

use crate::error::{CoreError, CoreResult};
use rust_decimal::{Decimal, RoundingStrategy};

/// Format a money amount as `$1,234.56`.
///
/// The amount is rounded half away from zero to cents. Negative amounts keep
/// the sign after the currency symbol (`$-1,234.50`).
#[must_use]
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let digits = format!("{:.2}", rounded.abs());
    format!("${}{}", sign, add_thousands_separator(&digits))
}

/// Format a percentage value with two decimals, e.g. `12.50%`.
///
/// # Errors
///
/// Returns an error if the value is NaN or infinite.
pub fn format_percentage(value: f64) -> CoreResult<String> {
    if !value.is_finite() {
        return Err(CoreError::non_finite("percentage", value));
    }
    Ok(format!("{:.2}%", value))
}

/// Add thousands separators to an unsigned number string.
fn add_thousands_separator(s: &str) -> String {
    let (integer_part, decimal_part) = match s.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (s, None),
    };

    let chars: Vec<char> = integer_part.chars().rev().collect();
    let formatted: String = chars
        .chunks(3)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<String>>()
        .join(",")
        .chars()
        .rev()
        .collect();

    match decimal_part {
        Some(dec) => format!("{}.{}", formatted, dec),
        None => formatted,
    }
}
