use winnow::combinator::{alt, opt, preceded, repeat};
use winnow::{ModalResult, Parser};

use crate::parser::tokens::*;
use crate::types::RawAmount;

/// Parse digits with interleaved group separators, dropping the separators
///
/// Separators may appear anywhere, including before the first digit, since the
/// field is re-grouped after every keystroke.
pub fn parse_grouped_digits(input: &mut &str) -> ModalResult<String> {
    repeat(0.., alt((parse_digit_run, parse_group_separator)))
        .fold(String::new, |mut acc: String, run: &str| {
            acc.push_str(run);
            acc
        })
        .parse_next(input)
}

/// Parse an integer part followed by an optional decimal point and fractional part
pub fn parse_amount_parts(input: &mut &str) -> ModalResult<RawAmount> {
    (
        parse_grouped_digits,
        opt(preceded(parse_decimal_point, parse_grouped_digits)),
    )
        .map(|(integer, fraction)| RawAmount { integer, fraction })
        .parse_next(input)
}
