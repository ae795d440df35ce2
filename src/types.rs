//! Type definitions for the rial converter
//!
//! This module defines the value types shared by the locale tables, the input parser,
//! the formatters and the converter state.

use serde::Deserialize;

/// Numeral script used to render digits, decimal points and group separators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumeralScript {
    /// ASCII digits with "." and ","
    Latin,
    /// Extended Arabic-Indic digits with the Arabic decimal and thousands separators
    #[default]
    Persian,
}

impl NumeralScript {
    /// Key of this script in the embedded glyph tables
    pub fn id(&self) -> &'static str {
        match self {
            NumeralScript::Latin => "latin",
            NumeralScript::Persian => "persian",
        }
    }
}

/// Glyphs a numeral script uses for the characters the formatter cares about
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptGlyphs {
    /// Digits zero through nine, in order
    pub digits: [char; 10],
    /// Decimal point
    pub decimal_point: char,
    /// Thousands separator
    pub group_separator: char,
}

impl Default for ScriptGlyphs {
    fn default() -> Self {
        Self {
            digits: ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'],
            decimal_point: '.',
            group_separator: ',',
        }
    }
}

impl ScriptGlyphs {
    /// ASCII equivalent of `c` if it is one of this script's glyphs
    pub fn ascii_of(&self, c: char) -> Option<char> {
        if let Some(pos) = self.digits.iter().position(|d| *d == c) {
            return char::from_digit(pos as u32, 10);
        }
        if c == self.decimal_point {
            Some('.')
        } else if c == self.group_separator {
            Some(',')
        } else {
            None
        }
    }

    /// This script's glyph for the ASCII digit, "." or ","
    pub fn glyph_for(&self, c: char) -> Option<char> {
        match c {
            '0'..='9' => c.to_digit(10).map(|d| self.digits[d as usize]),
            '.' => Some(self.decimal_point),
            ',' => Some(self.group_separator),
            _ => None,
        }
    }
}

/// The tab currently selected in the converter, i.e. which denomination is typed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Amount entered in toman, result in new rial and qiran
    #[default]
    Toman,
    /// Amount entered in old rial, result in new rial and qiran
    OldRial,
    /// Amount entered in new rial, result in toman
    Rial,
}

impl Mode {
    /// All modes in tab order
    pub const ALL: [Mode; 3] = [Mode::Toman, Mode::OldRial, Mode::Rial];
}

/// Normalized value of an input field: ASCII digits only, no group separators
///
/// `fraction` is `None` when no decimal point was typed and `Some("")` for a
/// trailing decimal point.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawAmount {
    /// Digits before the decimal point, possibly empty
    pub integer: String,
    /// Digits after the decimal point, if a point is present
    pub fraction: Option<String>,
}

impl RawAmount {
    /// True when nothing but group separators was typed
    pub fn is_empty(&self) -> bool {
        self.integer.is_empty() && self.fraction.is_none()
    }
}

/// An amount expressed in new rials, split into whole rials and qirans
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewRialAmount {
    /// The exact new rial value
    pub decimal: f64,
    /// Whole new rials
    pub rials: u64,
    /// Remaining qirans
    pub qirans: u64,
}

/// Result shown under the active input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Conversion {
    /// Toman or old rial converted to new rial
    NewRial(NewRialAmount),
    /// New rial converted to toman
    Toman(f64),
}
