// Payload handed to the result-sharing collaborator (copy, print, export).
// Only the plain-text rendering lives here.

use crate::state::SelectionState;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharePayload {
    pub label: String,
    pub value: String,
    pub unit: String,
}

impl SharePayload {
    /// Build from the current selection; `None` while the output is an error.
    pub fn from_state(state: &SelectionState) -> Option<Self> {
        let conversion = state.output().as_ref().ok()?;
        Some(Self {
            label: format!("{} {}", state.input().trim(), conversion.from.symbol),
            value: conversion.display.clone(),
            unit: conversion.to.symbol.to_string(),
        })
    }

    /// Clipboard text, e.g. "1 m = 100 cm"
    pub fn to_plain_text(&self) -> String {
        format!("{} = {} {}", self.label, self.value, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::models::CategoryId;

    #[test]
    fn test_share_default_state() {
        let state = SelectionState::new();
        let payload = SharePayload::from_state(&state).unwrap();
        assert_eq!(payload.label, "1 m");
        assert_eq!(payload.value, "100");
        assert_eq!(payload.unit, "cm");
        assert_eq!(payload.to_plain_text(), "1 m = 100 cm");
    }

    #[test]
    fn test_share_temperature() {
        let mut state = SelectionState::new();
        state.select_category(CategoryId::Temperature);
        state.set_input(" 100 ");
        let payload = SharePayload::from_state(&state).unwrap();
        assert_eq!(payload.to_plain_text(), "100 °C = 212 °F");
    }

    #[test]
    fn test_no_share_on_error() {
        let mut state = SelectionState::new();
        state.set_input("abc");
        assert!(SharePayload::from_state(&state).is_none());
    }

    #[test]
    fn test_json_shape() {
        let payload = SharePayload::from_state(&SelectionState::new()).unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"label": "1 m", "value": "100", "unit": "cm"})
        );
    }
}
