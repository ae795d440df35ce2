use crate::config::DEFAULT_MAX_FRACTION_DIGITS;
use crate::formatter::grouping::insert_separators;

/// Format a conversion result with "," grouping and up to 20 fractional digits
///
/// # Arguments
/// * `value` - The computed amount
/// * `is_explicit_zero` - Whether the user literally typed "0" in the originating field
///
/// # Returns
/// * `String` - ASCII digits, empty for non-finite values and for an unrequested zero
///
/// # Examples
/// ```
/// use rial_format::format_result;
///
/// assert_eq!(format_result(1228000.0, false), "1,228,000");
/// assert_eq!(format_result(0.0, false), "");
/// assert_eq!(format_result(0.0, true), "0");
/// ```
pub fn format_result(value: f64, is_explicit_zero: bool) -> String {
    format_result_with(value, is_explicit_zero, DEFAULT_MAX_FRACTION_DIGITS)
}

/// Format a conversion result, keeping at most `max_fraction_digits` fractional digits
pub fn format_result_with(value: f64, is_explicit_zero: bool, max_fraction_digits: usize) -> String {
    if !value.is_finite() {
        return String::new();
    }

    if value == 0.0 {
        return if is_explicit_zero {
            "0".to_string()
        } else {
            String::new()
        };
    }

    let magnitude = value.abs();

    // Display gives the shortest round-trip digits and never switches to exponent form
    let mut plain = magnitude.to_string();
    let fraction_len = plain.split_once('.').map_or(0, |(_, f)| f.len());
    if fraction_len > max_fraction_digits {
        plain = format!("{:.*}", max_fraction_digits, magnitude);
    }

    let (integer, fraction) = match plain.split_once('.') {
        Some((i, f)) => (i, f.trim_end_matches('0')),
        None => (plain.as_str(), ""),
    };

    let mut result = String::with_capacity(plain.len() + plain.len() / 3 + 1);
    if value.is_sign_negative() {
        result.push('-');
    }
    result.push_str(&insert_separators(integer, ','));
    if !fraction.is_empty() {
        result.push('.');
        result.push_str(fraction);
    }

    result
}
