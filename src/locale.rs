//! Numeral script support
//!
//! This module loads the glyph tables for every supported numeral script and
//! converts numeric text between them.

use std::collections::HashMap;
use std::sync::OnceLock;

use log::error;

use crate::error::LocaleError;
use crate::types::{NumeralScript, ScriptGlyphs};

type Result<T> = std::result::Result<T, LocaleError>;

/// Holds the glyph table of every known numeral script
pub struct ScriptManager {
    scripts: HashMap<String, ScriptGlyphs>,
}

// Global singleton for the glyph tables
static SCRIPT_MANAGER: OnceLock<ScriptManager> = OnceLock::new();

impl ScriptManager {
    fn new() -> Self {
        let mut manager = Self {
            scripts: HashMap::new(),
        };

        // An empty manager turns localize/delocalize into the identity
        if let Err(e) = manager.load_embedded_data() {
            error!("Failed to load embedded numeral script data: {}", e);
        }

        manager
    }

    fn load_embedded_data(&mut self) -> Result<()> {
        let scripts_toml = include_str!("locale/numeral_scripts.toml");
        self.parse_scripts(scripts_toml)
    }

    /// Parse the script table TOML data
    fn parse_scripts(&mut self, toml_str: &str) -> Result<()> {
        let parsed_toml: toml::Value =
            toml::from_str(toml_str).map_err(|e| LocaleError::ParseError(e.to_string()))?;

        let table = parsed_toml
            .as_table()
            .ok_or_else(|| LocaleError::ParseError("Root is not a table".to_string()))?;

        for (script_id, value) in table {
            let glyphs = Self::parse_script(script_id, value)?;
            self.scripts.insert(script_id.to_string(), glyphs);
        }

        Ok(())
    }

    fn parse_script(script_id: &str, value: &toml::Value) -> Result<ScriptGlyphs> {
        let table = value
            .as_table()
            .ok_or_else(|| LocaleError::ParseError(format!("{} is not a table", script_id)))?;

        let digits = table
            .get("digits")
            .and_then(|v| v.as_array())
            .ok_or_else(|| LocaleError::ParseError(format!("Missing digits in {}", script_id)))?;

        if digits.len() != 10 {
            return Err(LocaleError::ParseError(format!(
                "{} lists {} digits, expected 10",
                script_id,
                digits.len()
            )));
        }

        let mut glyphs = ScriptGlyphs::default();
        for (slot, digit) in glyphs.digits.iter_mut().zip(digits) {
            *slot = digit
                .as_str()
                .and_then(single_char)
                .ok_or_else(|| {
                    LocaleError::ParseError(format!("Invalid digit glyph in {}", script_id))
                })?;
        }

        glyphs.decimal_point = table
            .get("decimal")
            .and_then(|v| v.as_str())
            .and_then(single_char)
            .ok_or_else(|| {
                LocaleError::ParseError(format!("Missing or invalid decimal in {}", script_id))
            })?;

        glyphs.group_separator = table
            .get("group")
            .and_then(|v| v.as_str())
            .and_then(single_char)
            .ok_or_else(|| {
                LocaleError::ParseError(format!("Missing or invalid group in {}", script_id))
            })?;

        Ok(glyphs)
    }

    fn get() -> &'static Self {
        SCRIPT_MANAGER.get_or_init(Self::new)
    }

    fn glyphs(&self, script_id: &str) -> Option<&ScriptGlyphs> {
        self.scripts.get(script_id)
    }

    /// ASCII equivalent of a glyph from any known script
    fn ascii_of(&self, c: char) -> Option<char> {
        self.scripts.values().find_map(|glyphs| glyphs.ascii_of(c))
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Get the glyph table of a numeral script
pub fn script_glyphs(script: NumeralScript) -> Result<ScriptGlyphs> {
    ScriptManager::get()
        .glyphs(script.id())
        .cloned()
        .ok_or_else(|| LocaleError::NotFound(script.id().to_string()))
}

/// List all available script identifiers
pub fn list_available_scripts() -> Vec<String> {
    ScriptManager::get().scripts.keys().cloned().collect()
}

/// Render digits, decimal points and group separators of `text` in `script`
///
/// Glyphs of any known script are recognized, so mixed input is accepted.
/// Every other character is passed through unchanged.
///
/// # Examples
/// ```
/// use rial_format::{localize, NumeralScript};
///
/// assert_eq!(localize("1,228.5", NumeralScript::Persian), "۱٬۲۲۸٫۵");
/// assert_eq!(localize("۱۲ ریال", NumeralScript::Latin), "12 ریال");
/// ```
pub fn localize(text: &str, script: NumeralScript) -> String {
    let manager = ScriptManager::get();
    let Some(target) = manager.glyphs(script.id()) else {
        return text.to_string();
    };

    text.chars()
        .map(|c| {
            manager
                .ascii_of(c)
                .and_then(|ascii| target.glyph_for(ascii))
                .unwrap_or(c)
        })
        .collect()
}

/// Map digits and separators of any known script back to ASCII
///
/// # Examples
/// ```
/// use rial_format::delocalize;
///
/// assert_eq!(delocalize("۱٬۲۲۸٫۵"), "1,228.5");
/// assert_eq!(delocalize("۱2٫3"), "12.3");
/// ```
pub fn delocalize(text: &str) -> String {
    let manager = ScriptManager::get();
    text.chars()
        .map(|c| manager.ascii_of(c).unwrap_or(c))
        .collect()
}
