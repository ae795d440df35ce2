use winnow::ascii::digit1;
use winnow::token::literal;
use winnow::{ModalResult, Parser};

/// ASCII group separator accepted while typing
pub const GROUP_SEPARATOR: char = ',';

/// ASCII decimal point
pub const DECIMAL_POINT: char = '.';

/// Characters allowed in a delocalized input value
pub fn is_amount_char(c: char) -> bool {
    c.is_ascii_digit() || c == GROUP_SEPARATOR || c == DECIMAL_POINT
}

/// Parse a run of one or more ASCII digits
pub fn parse_digit_run<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    digit1.parse_next(input)
}

/// Parse a group separator, yielding nothing to keep
pub fn parse_group_separator<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    literal(GROUP_SEPARATOR).value("").parse_next(input)
}

/// Parse the decimal point
pub fn parse_decimal_point(input: &mut &str) -> ModalResult<char> {
    DECIMAL_POINT.parse_next(input)
}
