// WebAssembly bindings for the converter widget
use crate::catalog;
use crate::config::Config;
use crate::engine;
use crate::share::SharePayload;
use crate::state::SelectionState;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct UnitConverterWasm {
    state: SelectionState,
}

#[wasm_bindgen]
impl UnitConverterWasm {
    /// Create a widget state. `config_content` is the text of a unitconv.toml
    #[wasm_bindgen(constructor)]
    pub fn new(config_content: Option<String>) -> Result<UnitConverterWasm, JsValue> {
        let config = if let Some(config_content) = config_content {
            Config::load_from_str(&config_content)
                .map_err(|e| JsValue::from_str(&format!("Failed to load config: {}", e)))?
        } else {
            Config::empty()
        };

        Ok(Self {
            state: SelectionState::from_config(&config),
        })
    }

    /// Full catalog as JSON: categories with their ordered units
    #[wasm_bindgen]
    pub fn categories(&self) -> Result<String, JsValue> {
        serde_json::to_string(catalog::categories())
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize catalog: {}", e)))
    }

    /// Category ids in display order
    #[wasm_bindgen]
    pub fn category_ids(&self) -> js_sys::Array {
        catalog::categories()
            .iter()
            .map(|c| JsValue::from_str(c.id.as_str()))
            .collect()
    }

    /// Each mutating call returns the state snapshot as JSON
    #[wasm_bindgen]
    pub fn select_category(&mut self, id: &str) -> Result<String, JsValue> {
        let id: catalog::CategoryId = id
            .parse()
            .map_err(|e: engine::ConversionError| JsValue::from_str(&e.to_string()))?;
        self.state.select_category(id);
        self.snapshot()
    }

    #[wasm_bindgen]
    pub fn select_from(&mut self, unit: &str) -> Result<String, JsValue> {
        self.state
            .select_from(unit)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.snapshot()
    }

    #[wasm_bindgen]
    pub fn select_to(&mut self, unit: &str) -> Result<String, JsValue> {
        self.state
            .select_to(unit)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.snapshot()
    }

    #[wasm_bindgen]
    pub fn set_input(&mut self, raw: &str) -> Result<String, JsValue> {
        self.state.set_input(raw);
        self.snapshot()
    }

    #[wasm_bindgen]
    pub fn swap(&mut self) -> Result<String, JsValue> {
        self.state.swap();
        self.snapshot()
    }

    #[wasm_bindgen]
    pub fn reset(&mut self) -> Result<String, JsValue> {
        self.state.reset();
        self.snapshot()
    }

    /// {"category", "from", "to", "input", "output", "error"}
    #[wasm_bindgen]
    pub fn snapshot(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.state.snapshot())
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize state: {}", e)))
    }

    /// Display string of the result, undefined while the input is invalid
    #[wasm_bindgen]
    pub fn output(&self) -> Option<String> {
        self.state.output_text().map(str::to_string)
    }

    /// {"label", "value", "unit"} for the sharing widgets
    #[wasm_bindgen]
    pub fn share(&self) -> Result<Option<String>, JsValue> {
        SharePayload::from_state(&self.state)
            .map(|payload| {
                serde_json::to_string(&payload)
                    .map_err(|e| JsValue::from_str(&format!("Failed to serialize payload: {}", e)))
            })
            .transpose()
    }

    /// Clipboard text, e.g. "1 m = 100 cm"
    #[wasm_bindgen]
    pub fn share_text(&self) -> Option<String> {
        SharePayload::from_state(&self.state).map(|payload| payload.to_plain_text())
    }

    /// One-shot conversion of free text ("5 ft") into `to_unit`
    #[wasm_bindgen]
    pub fn convert_text(&self, text: &str, to_unit: &str) -> Result<String, JsValue> {
        engine::convert_quantity(text, to_unit, self.state.precision())
            .map(|conversion| conversion.display)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
