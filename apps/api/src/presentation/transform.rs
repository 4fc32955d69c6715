use serde::{Deserialize, Serialize};

use crate::inference::RawPrediction;
use crate::lookup::{SatisfactionCodec, UnknownClassError};
use crate::presentation::currency::Currency;

/// Decimal places the raw USD salary is rounded to before conversion.
const RAW_SALARY_DECIMALS: usize = 2;

/// What the caller renders or exports for one submitted profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Model salary rounded to cents, in USD.
    pub raw_salary: f64,
    /// `raw_salary` converted to `currency`, not rounded further.
    pub converted_salary: f64,
    pub currency: Currency,
    pub satisfaction_label: String,
    /// Whole units with thousands separators, e.g. `"5,408,000 INR"`.
    pub display_salary: String,
}

/// Rounds to `decimals` places on the exact binary value, ties to even.
///
/// Scaling by a power of ten first would round the product, not the value,
/// so this goes through the formatter, which works on the exact expansion.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{value:.decimals$}").parse().unwrap_or(value)
}

/// Two rounding steps, in this order: raw salary to cents, then conversion.
/// The converted amount is only rounded when formatted for display.
pub fn convert_salary(raw_salary: f64, currency: Currency) -> (f64, f64) {
    let rounded = round_to(raw_salary, RAW_SALARY_DECIMALS);
    (rounded, currency.convert(rounded))
}

/// Formats with zero decimals and comma thousands separators.
pub fn format_whole_units(amount: f64) -> String {
    let fixed = format!("{amount:.0}");
    let (sign, digits) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // "-0" after rounding a tiny negative amount
    if grouped == "0" {
        return grouped;
    }
    format!("{sign}{grouped}")
}

/// Builds the caller-facing result. Fails only if the class index is unknown,
/// in which case nothing partial is returned.
pub fn present(
    raw: &RawPrediction,
    currency: Currency,
    codec: &SatisfactionCodec,
) -> Result<PredictionResult, UnknownClassError> {
    let satisfaction_label = codec.decode(raw.satisfaction_class)?.to_string();
    let (raw_salary, converted_salary) = convert_salary(raw.salary, currency);

    Ok(PredictionResult {
        raw_salary,
        converted_salary,
        currency,
        satisfaction_label,
        display_salary: format!("{} {}", format_whole_units(converted_salary), currency),
    })
}
