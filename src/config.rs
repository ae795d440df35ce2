//! Converter configuration
//!
//! Settings are read from TOML. Every key is optional and falls back to the
//! redenomination ratios and Persian numerals.

use serde::Deserialize;

use crate::error::ConfigError;
use crate::types::NumeralScript;

/// Most fractional digits a result is shown with
pub const DEFAULT_MAX_FRACTION_DIGITS: usize = 20;
/// Toman in one new rial
pub const DEFAULT_TOMAN_PER_NEW_RIAL: u32 = 1_000;
/// Old rials in one new rial
pub const DEFAULT_OLD_RIAL_PER_NEW_RIAL: u32 = 10_000;
/// Qirans in one new rial
pub const DEFAULT_QIRAN_PER_NEW_RIAL: u32 = 100;

/// Settings for a converter instance
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Numeral script input fields and results are rendered in
    pub script: NumeralScript,
    /// Most fractional digits a result is shown with, at most 20
    pub max_fraction_digits: usize,
    /// Toman in one new rial
    pub toman_per_new_rial: u32,
    /// Old rials in one new rial
    pub old_rial_per_new_rial: u32,
    /// Qirans in one new rial
    pub qiran_per_new_rial: u32,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            script: NumeralScript::default(),
            max_fraction_digits: DEFAULT_MAX_FRACTION_DIGITS,
            toman_per_new_rial: DEFAULT_TOMAN_PER_NEW_RIAL,
            old_rial_per_new_rial: DEFAULT_OLD_RIAL_PER_NEW_RIAL,
            qiran_per_new_rial: DEFAULT_QIRAN_PER_NEW_RIAL,
        }
    }
}

impl ConverterConfig {
    /// Load a configuration from a TOML document
    ///
    /// # Examples
    /// ```
    /// use rial_format::{ConverterConfig, NumeralScript};
    ///
    /// let config = ConverterConfig::from_toml_str("script = \"latin\"").unwrap();
    /// assert_eq!(config.script, NumeralScript::Latin);
    /// assert_eq!(config.toman_per_new_rial, 1000);
    /// ```
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        let config: ConverterConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every ratio is usable and the fraction limit is supported
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_fraction_digits > DEFAULT_MAX_FRACTION_DIGITS {
            return Err(ConfigError::Invalid(format!(
                "max_fraction_digits must be at most {}, got {}",
                DEFAULT_MAX_FRACTION_DIGITS, self.max_fraction_digits
            )));
        }

        for (name, ratio) in [
            ("toman_per_new_rial", self.toman_per_new_rial),
            ("old_rial_per_new_rial", self.old_rial_per_new_rial),
            ("qiran_per_new_rial", self.qiran_per_new_rial),
        ] {
            if ratio == 0 {
                return Err(ConfigError::Invalid(format!("{} must be non-zero", name)));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let config = ConverterConfig::from_toml_str("").unwrap();
        assert_eq!(config, ConverterConfig::default());
        assert_eq!(config.script, NumeralScript::Persian);
    }

    #[test]
    fn test_overrides() {
        let config = ConverterConfig::from_toml_str(
            "script = \"latin\"\nmax_fraction_digits = 4\nqiran_per_new_rial = 10\n",
        )
        .unwrap();
        assert_eq!(config.script, NumeralScript::Latin);
        assert_eq!(config.max_fraction_digits, 4);
        assert_eq!(config.qiran_per_new_rial, 10);
        assert_eq!(config.old_rial_per_new_rial, DEFAULT_OLD_RIAL_PER_NEW_RIAL);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            ConverterConfig::from_toml_str("toman_per_new_rial = 0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            ConverterConfig::from_toml_str("max_fraction_digits = 21"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            ConverterConfig::from_toml_str("script = \"klingon\""),
            Err(ConfigError::Parse(_))
        ));
    }
}
