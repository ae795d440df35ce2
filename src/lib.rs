pub mod config;
pub mod convert;
pub mod error;
pub mod formatter;
pub mod locale;
pub mod parser;
pub mod state;
pub mod types;

// Main API
pub use config::ConverterConfig;
pub use error::{ConfigError, InputError, LocaleError};
pub use formatter::{
    format_incremental, format_incremental_in, format_result, format_result_with,
    try_format_incremental,
};
pub use locale::{delocalize, localize};
pub use parser::parse_amount;
pub use state::ConverterState;
pub use types::*;

#[cfg(test)]
mod tests;
