// Conversion engine: parse the value field, route it through the base unit
// of the category and format the result for display.

pub mod convert;
pub mod error;
pub mod formatter;
pub mod parser;

#[cfg(test)]
mod tests;

pub use convert::{convert, convert_quantity, convert_value, Conversion};
pub use error::{ConversionError, ConversionResult};
pub use formatter::{format_value, DEFAULT_PRECISION, MAX_PRECISION};
pub use parser::parse_input;
