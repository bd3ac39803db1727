use crate::catalog::models::CategoryId;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum ConversionError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown unit '{unit}'{}", .category.as_ref().map(|c| format!(" in {}", c)).unwrap_or_default())]
    UnknownUnit {
        category: Option<CategoryId>,
        unit: String,
    },

    #[error("No value entered")]
    EmptyInput,

    #[error("Not a number: {0}")]
    InvalidNumber(String),

    #[error("Result is not a finite number")]
    NonFiniteResult,

    #[error("Cannot convert between {from} and {to}")]
    CategoryMismatch { from: CategoryId, to: CategoryId },
}

pub type ConversionResult<T> = Result<T, ConversionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ConversionError::UnknownUnit {
            category: Some(CategoryId::Length),
            unit: "kg".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown unit 'kg' in length");

        let err = ConversionError::UnknownUnit {
            category: None,
            unit: "parsec".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown unit 'parsec'");

        let err = ConversionError::CategoryMismatch {
            from: CategoryId::Weight,
            to: CategoryId::Volume,
        };
        assert_eq!(err.to_string(), "Cannot convert between weight and volume");
    }
}
