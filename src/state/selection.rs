use crate::catalog::models::{Category, CategoryId, Unit};
use crate::catalog::registry::{category, default_units, lookup_unit_in};
use crate::config::Config;
use crate::engine::convert::{convert, Conversion};
use crate::engine::error::{ConversionError, ConversionResult};
use crate::engine::formatter::DEFAULT_PRECISION;
use serde::Serialize;

/// The live state of one converter widget: active category, the two chosen
/// units, the raw input text and the outcome of the latest recomputation.
///
/// Every transition recomputes synchronously, so `output` always reflects
/// the current selection.
#[derive(Debug, Clone)]
pub struct SelectionState {
    category: &'static Category,
    from: &'static Unit,
    to: &'static Unit,
    input: String,
    output: ConversionResult<Conversion>,
    initial_input: String,
    precision: usize,
}

/// Serializable view of the state for hosts (CLI `--json`, wasm).
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub category: CategoryId,
    pub from: &'static str,
    pub to: &'static str,
    pub input: String,
    pub output: Option<String>,
    pub error: Option<String>,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionState {
    /// Length, meter -> centimeter, input "1"
    pub fn new() -> Self {
        Self::with_defaults(CategoryId::Length, "1", DEFAULT_PRECISION)
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_defaults(
            config.defaults.category,
            &config.defaults.value,
            config.display.precision(),
        )
    }

    pub fn with_defaults(category_id: CategoryId, input: &str, precision: usize) -> Self {
        let active = category(category_id);
        let (from, to) = default_units(category_id);
        let mut state = Self {
            category: active,
            from,
            to,
            input: input.to_string(),
            output: Err(ConversionError::EmptyInput),
            initial_input: input.to_string(),
            precision,
        };
        state.recompute();
        state
    }

    pub fn category(&self) -> &'static Category {
        self.category
    }

    pub fn from_unit(&self) -> &'static Unit {
        self.from
    }

    pub fn to_unit(&self) -> &'static Unit {
        self.to
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn output(&self) -> &ConversionResult<Conversion> {
        &self.output
    }

    /// Display string of the current result, if the last recomputation succeeded
    pub fn output_text(&self) -> Option<&str> {
        self.output.as_ref().ok().map(|c| c.display.as_str())
    }

    /// Switch category; both units fall back to the category defaults.
    pub fn select_category(&mut self, id: CategoryId) {
        let active = category(id);
        let (from, to) = default_units(id);
        self.category = active;
        self.from = from;
        self.to = to;
        log::debug!("category -> {} ({} -> {})", id, from.id, to.id);
        self.recompute();
    }

    /// Pick the source unit. Units outside the active category are refused
    /// and leave the state untouched.
    pub fn select_from(&mut self, unit: &str) -> ConversionResult<()> {
        self.from = self.resolve(unit)?;
        log::debug!("from -> {}", self.from.id);
        self.recompute();
        Ok(())
    }

    pub fn select_to(&mut self, unit: &str) -> ConversionResult<()> {
        self.to = self.resolve(unit)?;
        log::debug!("to -> {}", self.to.id);
        self.recompute();
        Ok(())
    }

    /// Replace the raw input text. Recomputes on every edit.
    pub fn set_input(&mut self, raw: impl Into<String>) {
        self.input = raw.into();
        self.recompute();
    }

    pub fn set_precision(&mut self, precision: usize) {
        self.precision = precision;
        self.recompute();
    }

    /// Exchange the units and move the shown result into the input field.
    /// A failed output swaps in as an empty input.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.from, &mut self.to);
        let previous_output = self.output_text().unwrap_or_default().to_string();
        self.input = previous_output;
        log::debug!("swap -> {} -> {}, input '{}'", self.from.id, self.to.id, self.input);
        self.recompute();
    }

    /// Restore the category's default units and the initial input.
    pub fn reset(&mut self) {
        let (from, to) = default_units(self.category.id);
        self.from = from;
        self.to = to;
        self.input = self.initial_input.clone();
        log::debug!("reset -> {} -> {}", from.id, to.id);
        self.recompute();
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            category: self.category.id,
            from: self.from.id,
            to: self.to.id,
            input: self.input.clone(),
            output: self.output_text().map(str::to_string),
            error: self.output.as_ref().err().map(|e| e.to_string()),
        }
    }

    fn resolve(&self, unit: &str) -> ConversionResult<&'static Unit> {
        lookup_unit_in(self.category, unit).ok_or_else(|| ConversionError::UnknownUnit {
            category: Some(self.category.id),
            unit: unit.to_string(),
        })
    }

    fn recompute(&mut self) {
        self.output = convert(
            self.category,
            self.from.id,
            self.to.id,
            &self.input,
            self.precision,
        );
    }
}
