use crate::engine::error::ConversionError;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Plain decimal literal: optional sign, digits with optional fraction,
    /// optional exponent. Rejects "inf", "NaN" and hex.
    static ref NUMBER_PATTERN: Regex =
        Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?$").unwrap();
}

/// Parse the raw text of the value field
pub fn parse_input(raw: &str) -> Result<f64, ConversionError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConversionError::EmptyInput);
    }

    if !NUMBER_PATTERN.is_match(trimmed) {
        return Err(ConversionError::InvalidNumber(trimmed.to_string()));
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| ConversionError::InvalidNumber(trimmed.to_string()))?;

    // "1e999" matches the pattern but overflows
    if !value.is_finite() {
        return Err(ConversionError::InvalidNumber(trimmed.to_string()));
    }

    Ok(value)
}
