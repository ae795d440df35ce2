//! Display formatting module
//!
//! This module turns keystrokes into grouped, localized field values and renders
//! computed amounts. The main entry points are `format_incremental` and `format_result`.

mod grouping;
mod result;

pub use grouping::group_integer;
pub use result::{format_result, format_result_with};

use log::debug;

use crate::error::InputError;
use crate::locale::{delocalize, localize};
use crate::parser::parse_raw_amount;
use crate::types::NumeralScript;

/// Format the new value of an input field, keeping `previous` if the keystroke is invalid
///
/// The result is rendered in Persian numerals. See `format_incremental_in` for other scripts.
///
/// # Examples
/// ```
/// use rial_format::format_incremental;
///
/// assert_eq!(format_incremental("", "1228000"), "۱٬۲۲۸٬۰۰۰");
/// assert_eq!(format_incremental("", "."), "۰٫");
/// assert_eq!(format_incremental("۱۲", "۱۲a"), "۱۲");
/// ```
pub fn format_incremental(previous: &str, raw: &str) -> String {
    format_incremental_in(previous, raw, NumeralScript::Persian)
}

/// Format the new value of an input field in `script`, keeping `previous` on rejection
pub fn format_incremental_in(previous: &str, raw: &str, script: NumeralScript) -> String {
    match try_format_incremental(raw, script) {
        Ok(formatted) => formatted,
        Err(e) => {
            debug!("Rejected input {:?}: {}", raw, e);
            previous.to_string()
        }
    }
}

/// Format the new value of an input field, reporting why invalid input was refused
///
/// The integer part is regrouped in threes; fractional digits are kept exactly as
/// typed, including a trailing decimal point. A missing integer part becomes "0".
/// Input made only of group separators clears the field.
///
/// # Arguments
/// * `raw` - The field value after the keystroke, in any known numeral script
/// * `script` - The numeral script to render the result in
///
/// # Returns
/// * `Result<String, InputError>` - The new display string
pub fn try_format_incremental(raw: &str, script: NumeralScript) -> Result<String, InputError> {
    let ascii = delocalize(raw);
    let amount = parse_raw_amount(&ascii)?;

    if amount.is_empty() {
        return Ok(String::new());
    }

    let formatted = match amount.fraction {
        // ".5" and a lone "." both show a leading zero
        Some(fraction) if amount.integer.is_empty() => format!("0.{}", fraction),
        Some(fraction) => format!("{}.{}", grouped(&amount.integer)?, fraction),
        None => grouped(&amount.integer)?,
    };

    Ok(localize(&formatted, script))
}

fn grouped(integer: &str) -> Result<String, InputError> {
    group_integer(integer).ok_or_else(|| InputError::Malformed(integer.to_string()))
}
