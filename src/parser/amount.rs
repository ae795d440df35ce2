use winnow::Parser;

use crate::error::InputError;
use crate::locale::delocalize;
use crate::parser::combinators::parse_amount_parts;
use crate::parser::tokens::{DECIMAL_POINT, GROUP_SEPARATOR, is_amount_char};
use crate::types::RawAmount;

/// Validate a delocalized input value and split it into integer and fractional digits
///
/// Group separators are dropped wherever they appear. The value must contain at most
/// one decimal point and nothing but ASCII digits, "," and ".".
///
/// # Arguments
/// * `ascii` - The field value, already delocalized
///
/// # Returns
/// * `Result<RawAmount, InputError>` - The normalized parts, or the reason the value was refused
///
/// # Examples
/// ```
/// use rial_format::parser::parse_raw_amount;
///
/// let amount = parse_raw_amount("1,228.5").unwrap();
/// assert_eq!(amount.integer, "1228");
/// assert_eq!(amount.fraction.as_deref(), Some("5"));
/// ```
pub fn parse_raw_amount(ascii: &str) -> Result<RawAmount, InputError> {
    if ascii.matches(DECIMAL_POINT).count() > 1 {
        return Err(InputError::MultipleDecimalPoints);
    }
    if let Some(c) = ascii.chars().find(|c| !is_amount_char(*c)) {
        return Err(InputError::InvalidCharacter(c));
    }

    parse_amount_parts
        .parse(ascii)
        .map_err(|e| InputError::Malformed(e.to_string()))
}

/// Parse a display string into a number for arithmetic
///
/// Empty or all-whitespace text is 0. Otherwise the text is delocalized, stripped of
/// group separators and read as an `f64`; text the formatter would never produce
/// yields `NaN`.
///
/// # Examples
/// ```
/// use rial_format::parse_amount;
///
/// assert_eq!(parse_amount(""), 0.0);
/// assert_eq!(parse_amount("۱٬۲۲۸٬۰۰۰"), 1228000.0);
/// ```
pub fn parse_amount(text: &str) -> f64 {
    if text.trim().is_empty() {
        return 0.0;
    }

    let ascii: String = delocalize(text)
        .chars()
        .filter(|c| *c != GROUP_SEPARATOR)
        .collect();

    ascii.trim().parse::<f64>().unwrap_or(f64::NAN)
}
