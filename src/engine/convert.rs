use crate::catalog::detector::parse_quantity;
use crate::catalog::models::{Category, Unit};
use crate::catalog::registry::{lookup_unit, lookup_unit_in};
use crate::engine::error::{ConversionError, ConversionResult};
use crate::engine::formatter::format_value;
use crate::engine::parser::parse_input;
use serde::Serialize;

/// A successful conversion. `value` keeps full precision; `display`
/// is the rounded string shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    pub input: f64,
    pub value: f64,
    pub display: String,
    pub from: &'static Unit,
    pub to: &'static Unit,
}

/// Convert a number between two units of a category
pub fn convert_value(
    category: &'static Category,
    from_unit: &str,
    to_unit: &str,
    value: f64,
) -> ConversionResult<f64> {
    let from = resolve(category, from_unit)?;
    let to = resolve(category, to_unit)?;
    apply(from, to, value)
}

/// Convert the raw text of the value field. Both units must belong to
/// `category`; the text must parse as a decimal number.
pub fn convert(
    category: &'static Category,
    from_unit: &str,
    to_unit: &str,
    raw: &str,
    precision: usize,
) -> ConversionResult<Conversion> {
    let from = resolve(category, from_unit)?;
    let to = resolve(category, to_unit)?;
    let input = parse_input(raw)?;
    let value = apply(from, to, input)?;

    log::debug!(
        "[{}] {} {} -> {} {}",
        category.id,
        input,
        from.id,
        value,
        to.id
    );

    Ok(Conversion {
        input,
        value,
        display: format_value(value, precision),
        from,
        to,
    })
}

/// Convert free text such as "5 ft" into any unit of the same category
pub fn convert_quantity(text: &str, to_unit: &str, precision: usize) -> ConversionResult<Conversion> {
    let quantity = parse_quantity(text)?;
    let (to_category, to) = lookup_unit(to_unit).ok_or_else(|| ConversionError::UnknownUnit {
        category: None,
        unit: to_unit.to_string(),
    })?;

    if to_category.id != quantity.category.id {
        return Err(ConversionError::CategoryMismatch {
            from: quantity.category.id,
            to: to_category.id,
        });
    }

    let value = apply(quantity.unit, to, quantity.value)?;
    Ok(Conversion {
        input: quantity.value,
        value,
        display: format_value(value, precision),
        from: quantity.unit,
        to,
    })
}

fn resolve(category: &'static Category, unit: &str) -> ConversionResult<&'static Unit> {
    lookup_unit_in(category, unit).ok_or_else(|| ConversionError::UnknownUnit {
        category: Some(category.id),
        unit: unit.to_string(),
    })
}

fn apply(from: &Unit, to: &Unit, value: f64) -> ConversionResult<f64> {
    let result = if from.id == to.id {
        value
    } else {
        to.from_base(from.to_base(value))
    };

    if !result.is_finite() {
        return Err(ConversionError::NonFiniteResult);
    }
    Ok(result)
}
