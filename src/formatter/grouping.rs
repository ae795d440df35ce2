use num_bigint::BigUint;
use num_traits::{Num, Zero};

/// Insert `separator` between every group of three digits, counting from the right
pub(crate) fn insert_separators(digits: &str, separator: char) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in chars.iter().enumerate() {
        let remaining = chars.len() - i;
        if i > 0 && remaining % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(*digit);
    }

    grouped
}

/// Re-render an integer part with "," between groups of three digits
///
/// The digits are read as an arbitrary-precision integer, so leading zeros are
/// dropped and values past `u64` still group exactly. An empty string is zero.
/// Returns `None` if `digits` is not a plain run of ASCII digits.
///
/// # Examples
/// ```
/// use rial_format::formatter::group_integer;
///
/// assert_eq!(group_integer("1228000").as_deref(), Some("1,228,000"));
/// assert_eq!(group_integer("007").as_deref(), Some("7"));
/// assert_eq!(group_integer("").as_deref(), Some("0"));
/// ```
pub fn group_integer(digits: &str) -> Option<String> {
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let value = if digits.is_empty() {
        BigUint::zero()
    } else {
        BigUint::from_str_radix(digits, 10).ok()?
    };

    Some(insert_separators(&value.to_str_radix(10), ','))
}
