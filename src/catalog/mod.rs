// Conversion catalog: categories, units and the lookups over them.
// The tables are static data; nothing here mutates after load.

pub mod detector;
pub mod models;
pub mod registry;
pub mod validation;

#[cfg(test)]
mod tests;

pub use detector::{looks_like_quantity, parse_quantity, Quantity};
pub use models::{Category, CategoryId, Unit};
pub use registry::{
    categories, category, default_units, find_category, lookup_unit, lookup_unit_in,
};
pub use validation::{validate_catalog, CatalogIssue, CatalogReport, IssueSeverity};
