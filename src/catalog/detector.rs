use crate::catalog::models::{Category, Unit};
use crate::catalog::registry::lookup_unit;
use crate::engine::error::ConversionError;
use crate::engine::parser::parse_input;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Number followed by a unit spelling
    /// Examples: "100 cm", "10.5m", "-40 °F", "1e3 kg", "3 fl oz"
    static ref QUANTITY_PATTERN: Regex = Regex::new(
        r#"^\s*([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)\s*([^\d\s+-].*?)\s*$"#
    ).unwrap();
}

/// A free-text amount resolved against the catalog
#[derive(Debug, Clone, Copy)]
pub struct Quantity {
    pub value: f64,
    pub category: &'static Category,
    pub unit: &'static Unit,
}

/// Check if a string looks like an amount with a unit attached
pub fn looks_like_quantity(s: &str) -> bool {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return false;
    }

    QUANTITY_PATTERN.is_match(trimmed)
}

/// Parse "12.5 km" into a value and a catalog unit
pub fn parse_quantity(text: &str) -> Result<Quantity, ConversionError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ConversionError::EmptyInput);
    }

    let caps = QUANTITY_PATTERN
        .captures(trimmed)
        .ok_or_else(|| ConversionError::InvalidNumber(trimmed.to_string()))?;

    let value = parse_input(&caps[1])?;

    let spelling = &caps[2];
    let (category, unit) =
        lookup_unit(spelling).ok_or_else(|| ConversionError::UnknownUnit {
            category: None,
            unit: spelling.to_string(),
        })?;

    log::debug!(
        "parsed quantity '{}' as {} {} ({})",
        text,
        value,
        unit.id,
        category.id
    );

    Ok(Quantity {
        value,
        category,
        unit,
    })
}
