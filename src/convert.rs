//! Conversion between toman, old rial and new rial
//!
//! Results exist only for positive, finite amounts.

use crate::config::{
    ConverterConfig, DEFAULT_OLD_RIAL_PER_NEW_RIAL, DEFAULT_QIRAN_PER_NEW_RIAL,
    DEFAULT_TOMAN_PER_NEW_RIAL,
};
use crate::types::{Conversion, Mode, NewRialAmount};

/// Convert an amount of some denomination into new rials and qirans
///
/// `units_per_new_rial` is how many of the input unit make one new rial. Rials are
/// the floor of the new rial value and qirans its rounded remainder, so a remainder
/// just under one rial shows as a full `qiran_per_new_rial` qirans.
pub fn to_new_rial(
    amount: f64,
    units_per_new_rial: u32,
    qiran_per_new_rial: u32,
) -> Option<NewRialAmount> {
    if !amount.is_finite() || amount <= 0.0 {
        return None;
    }

    let decimal = amount / f64::from(units_per_new_rial);
    let rials = decimal.floor();
    let qirans = ((decimal - rials) * f64::from(qiran_per_new_rial)).round();

    Some(NewRialAmount {
        decimal,
        rials: rials as u64,
        qirans: qirans as u64,
    })
}

/// Convert toman to new rials and qirans
///
/// # Examples
/// ```
/// use rial_format::convert::toman_to_new_rial;
///
/// let amount = toman_to_new_rial(122800.0).unwrap();
/// assert_eq!((amount.rials, amount.qirans), (122, 80));
/// ```
pub fn toman_to_new_rial(toman: f64) -> Option<NewRialAmount> {
    to_new_rial(toman, DEFAULT_TOMAN_PER_NEW_RIAL, DEFAULT_QIRAN_PER_NEW_RIAL)
}

/// Convert old rials to new rials and qirans
pub fn old_rial_to_new_rial(old_rial: f64) -> Option<NewRialAmount> {
    to_new_rial(
        old_rial,
        DEFAULT_OLD_RIAL_PER_NEW_RIAL,
        DEFAULT_QIRAN_PER_NEW_RIAL,
    )
}

/// Convert new rials to toman
pub fn new_rial_to_toman(new_rial: f64) -> Option<f64> {
    new_rial_to_toman_with(new_rial, DEFAULT_TOMAN_PER_NEW_RIAL)
}

fn new_rial_to_toman_with(new_rial: f64, toman_per_new_rial: u32) -> Option<f64> {
    if !new_rial.is_finite() || new_rial <= 0.0 {
        return None;
    }
    Some(new_rial * f64::from(toman_per_new_rial))
}

/// Convert an amount typed in the field of `mode` using the ratios in `config`
pub fn convert(mode: Mode, amount: f64, config: &ConverterConfig) -> Option<Conversion> {
    match mode {
        Mode::Toman => to_new_rial(amount, config.toman_per_new_rial, config.qiran_per_new_rial)
            .map(Conversion::NewRial),
        Mode::OldRial => to_new_rial(
            amount,
            config.old_rial_per_new_rial,
            config.qiran_per_new_rial,
        )
        .map(Conversion::NewRial),
        Mode::Rial => {
            new_rial_to_toman_with(amount, config.toman_per_new_rial).map(Conversion::Toman)
        }
    }
}
