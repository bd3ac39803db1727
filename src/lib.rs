pub mod catalog;
pub mod config;
pub mod engine;
pub mod share;
pub mod state;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use catalog::{Category, CategoryId, Unit};
pub use config::Config;
pub use engine::{convert, Conversion, ConversionError};
pub use share::SharePayload;
pub use state::SelectionState;
