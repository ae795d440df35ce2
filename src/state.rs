//! Converter state
//!
//! The whole widget as a value: one display string per denomination, the
//! selected tab and a transient status line. Fields are replaced wholesale on
//! every change.

use log::trace;

use crate::config::ConverterConfig;
use crate::convert::convert;
use crate::formatter::{format_incremental_in, format_result_with};
use crate::locale::{delocalize, localize};
use crate::parser::parse_amount;
use crate::types::{Conversion, Mode};

const NEW_RIAL_LABEL: &str = "ریال جدید";
const QIRAN_LABEL: &str = "قران";
const TOMAN_LABEL: &str = "تومان";

/// State of a converter: three input fields and the active mode
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConverterState {
    config: ConverterConfig,
    mode: Mode,
    toman: String,
    old_rial: String,
    rial: String,
    status: Option<String>,
}

impl ConverterState {
    /// Create an empty converter with the toman tab selected
    pub fn new(config: ConverterConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Settings this converter was created with
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// The selected tab
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switch tabs; every field keeps its value
    pub fn set_mode(&mut self, mode: Mode) {
        trace!("Switching mode from {:?} to {:?}", self.mode, mode);
        self.mode = mode;
    }

    /// Display string of the field for `mode`
    pub fn input(&self, mode: Mode) -> &str {
        match mode {
            Mode::Toman => &self.toman,
            Mode::OldRial => &self.old_rial,
            Mode::Rial => &self.rial,
        }
    }

    fn input_mut(&mut self, mode: Mode) -> &mut String {
        match mode {
            Mode::Toman => &mut self.toman,
            Mode::OldRial => &mut self.old_rial,
            Mode::Rial => &mut self.rial,
        }
    }

    /// Apply a change event to the field for `mode` and return its new display string
    ///
    /// Invalid input leaves the field untouched.
    pub fn handle_input(&mut self, mode: Mode, raw: &str) -> &str {
        let script = self.config.script;
        let field = self.input_mut(mode);
        *field = format_incremental_in(field, raw, script);
        field
    }

    /// Numeric value of the field for `mode`
    pub fn amount(&self, mode: Mode) -> f64 {
        parse_amount(self.input(mode))
    }

    /// Whether any field holds exactly "0"
    pub fn is_explicit_zero(&self) -> bool {
        Mode::ALL
            .iter()
            .any(|mode| delocalize(self.input(*mode)) == "0")
    }

    /// Result for the active field, if it holds a positive amount
    pub fn conversion(&self) -> Option<Conversion> {
        convert(self.mode, self.amount(self.mode), &self.config)
    }

    /// One-line localized description of the current result
    ///
    /// # Examples
    /// ```
    /// use rial_format::{ConverterState, Mode};
    ///
    /// let mut state = ConverterState::default();
    /// state.handle_input(Mode::Toman, "122800");
    /// assert_eq!(state.summary().as_deref(), Some("۱۲۲ ریال جدید و ۸۰ قران"));
    /// ```
    pub fn summary(&self) -> Option<String> {
        let summary = match self.conversion()? {
            Conversion::NewRial(amount) => {
                let rials = self.render(amount.rials as f64, self.is_explicit_zero());
                if amount.qirans > 0 {
                    let qirans = self.render(amount.qirans as f64, self.is_explicit_zero());
                    format!("{} {} و {} {}", rials, NEW_RIAL_LABEL, qirans, QIRAN_LABEL)
                } else {
                    format!("{} {}", rials, NEW_RIAL_LABEL)
                }
            }
            Conversion::Toman(toman) => {
                format!(
                    "{} {}",
                    self.render(toman, self.is_explicit_zero()),
                    TOMAN_LABEL
                )
            }
        };
        Some(summary)
    }

    fn render(&self, value: f64, is_explicit_zero: bool) -> String {
        let ascii = format_result_with(value, is_explicit_zero, self.config.max_fraction_digits);
        localize(&ascii, self.config.script)
    }

    /// Transient message shown after sharing or copying a link
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Show a transient status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    /// Hide the status message
    pub fn clear_status(&mut self) {
        self.status = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NumeralScript;

    #[test]
    fn test_fields_are_independent() {
        let mut state = ConverterState::default();
        state.handle_input(Mode::Toman, "1000");
        state.handle_input(Mode::Rial, "2.5");

        assert_eq!(state.input(Mode::Toman), "۱٬۰۰۰");
        assert_eq!(state.input(Mode::Rial), "۲٫۵");
        assert_eq!(state.input(Mode::OldRial), "");
    }

    #[test]
    fn test_rejected_input_keeps_field() {
        let mut state = ConverterState::default();
        state.handle_input(Mode::Toman, "12.5");
        assert_eq!(state.handle_input(Mode::Toman, "12.5."), "۱۲٫۵");
    }

    #[test]
    fn test_mode_switch_keeps_inputs() {
        let mut state = ConverterState::default();
        state.handle_input(Mode::Toman, "122800");
        state.set_mode(Mode::Rial);
        assert_eq!(state.mode(), Mode::Rial);
        assert_eq!(state.conversion(), None);

        state.set_mode(Mode::Toman);
        assert!(state.conversion().is_some());
        assert_eq!(state.input(Mode::Toman), "۱۲۲٬۸۰۰");
    }

    #[test]
    fn test_explicit_zero() {
        let mut state = ConverterState::default();
        assert!(!state.is_explicit_zero());
        state.handle_input(Mode::OldRial, "0");
        assert!(state.is_explicit_zero());
        state.handle_input(Mode::OldRial, "0.");
        assert!(!state.is_explicit_zero());
    }

    #[test]
    fn test_summaries() {
        let mut state = ConverterState::default();
        state.handle_input(Mode::Toman, "123000");
        assert_eq!(state.summary().as_deref(), Some("۱۲۳ ریال جدید"));

        state.handle_input(Mode::Toman, "500");
        assert_eq!(state.summary().as_deref(), Some(" ریال جدید و ۵۰ قران"));

        state.set_mode(Mode::Rial);
        state.handle_input(Mode::Rial, "1228.5");
        assert_eq!(state.summary().as_deref(), Some("۱٬۲۲۸٬۵۰۰ تومان"));

        state.handle_input(Mode::Rial, "");
        assert_eq!(state.summary(), None);
    }

    #[test]
    fn test_zero_rials_follow_explicit_zero() {
        let mut state = ConverterState::default();
        state.handle_input(Mode::Toman, "500");
        assert_eq!(state.summary().as_deref(), Some(" ریال جدید و ۵۰ قران"));

        state.handle_input(Mode::OldRial, "0");
        assert_eq!(state.summary().as_deref(), Some("۰ ریال جدید و ۵۰ قران"));
    }

    #[test]
    fn test_latin_config() {
        let config = ConverterConfig {
            script: NumeralScript::Latin,
            ..ConverterConfig::default()
        };
        let mut state = ConverterState::new(config);
        state.set_mode(Mode::OldRial);
        state.handle_input(Mode::OldRial, "۱۲۲۸۰۰۰");
        assert_eq!(state.input(Mode::OldRial), "1,228,000");
        assert_eq!(state.summary().as_deref(), Some("122 ریال جدید و 80 قران"));
    }

    #[test]
    fn test_status() {
        let mut state = ConverterState::default();
        assert_eq!(state.status(), None);
        state.set_status("لینک کپی شد!");
        assert_eq!(state.status(), Some("لینک کپی شد!"));
        state.clear_status();
        assert_eq!(state.status(), None);
    }
}
