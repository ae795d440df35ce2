use winnow::Parser;

use crate::parser::combinators::*;
use crate::parser::tokens::*;
use crate::*;

#[test]
fn test_digit_run_stops_at_separator() {
    let mut input = "123,456";
    assert_eq!(parse_digit_run.parse_next(&mut input).unwrap(), "123");
    assert_eq!(input, ",456");
    assert_eq!(parse_group_separator.parse_next(&mut input).unwrap(), "");
    assert_eq!(input, "456");
}

#[test]
fn test_grouped_digits_leaves_decimal_point() {
    let mut input = ",1,2,,3.45";
    assert_eq!(parse_grouped_digits.parse_next(&mut input).unwrap(), "123");
    assert_eq!(input, ".45");
}

#[test]
fn test_amount_parts_without_fraction() {
    let mut input = "9,999";
    let amount = parse_amount_parts.parse_next(&mut input).unwrap();
    assert_eq!(amount.integer, "9999");
    assert!(amount.fraction.is_none());
    assert!(input.is_empty());
}

#[test]
fn test_amount_parts_stop_at_second_point() {
    let mut input = "1.2.3";
    let amount = parse_amount_parts.parse_next(&mut input).unwrap();
    assert_eq!(amount.fraction.as_deref(), Some("2"));
    assert_eq!(input, ".3");
}

#[test]
fn test_amount_chars() {
    assert!(is_amount_char('0'));
    assert!(is_amount_char(','));
    assert!(is_amount_char('.'));
    assert!(!is_amount_char('۱'));
    assert!(!is_amount_char(' '));
}

#[test]
fn test_documented_examples() {
    assert_eq!(format_incremental("", "1228000"), "۱٬۲۲۸٬۰۰۰");
    assert_eq!(format_incremental("", "."), "۰٫");
    assert_eq!(format_incremental("۱۲", "1.2.3"), "۱۲");
    assert_eq!(parse_amount(""), 0.0);
    assert_eq!(parse_amount("۱٬۲۲۸٬۰۰۰"), 1228000.0);
    assert_eq!(format_result(0.0, false), "");
    assert_eq!(format_result(0.0, true), "0");
}

#[test]
fn test_display_string_is_stable() {
    for raw in ["1228000", ".", ".5", "12.", "0.050", "1,2,3,4", "۹۸۷۶۵۴۳۲۱۰"] {
        let display = format_incremental("", raw);
        let reformatted = localize(&delocalize(&display), NumeralScript::Persian);
        assert_eq!(reformatted, display, "display for {:?} is not stable", raw);
        assert_eq!(format_incremental("", &display), display);
    }
}

#[test]
fn test_huge_integer_groups_exactly() {
    let raw = "9".repeat(40);
    let display = format_incremental("", &raw);
    let ascii = delocalize(&display);
    assert_eq!(ascii.len(), 40 + 13);
    assert!(ascii.starts_with("9,999,"));
    assert_eq!(ascii.replace(',', ""), raw);
}
