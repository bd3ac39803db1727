use crate::catalog::models::{Category, Unit};
use crate::catalog::registry::{categories, spellings};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    Error,
    Warning,
}

/// One finding against a category (`length`) or a unit (`length/meter`)
#[derive(Debug, Clone)]
pub struct CatalogIssue {
    pub severity: IssueSeverity,
    pub location: String,
    pub message: String,
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.location, self.message)
    }
}

/// Findings in the order they were found
#[derive(Debug, Clone, Default)]
pub struct CatalogReport {
    issues: Vec<CatalogIssue>,
}

impl CatalogReport {
    fn error(&mut self, location: &str, message: String) {
        self.record(IssueSeverity::Error, location, message);
    }

    fn warning(&mut self, location: &str, message: String) {
        self.record(IssueSeverity::Warning, location, message);
    }

    fn record(&mut self, severity: IssueSeverity, location: &str, message: String) {
        self.issues.push(CatalogIssue {
            severity,
            location: location.to_string(),
            message,
        });
    }

    pub fn issues(&self) -> &[CatalogIssue] {
        &self.issues
    }

    pub fn errors(&self) -> impl Iterator<Item = &CatalogIssue> {
        self.of(IssueSeverity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &CatalogIssue> {
        self.of(IssueSeverity::Warning)
    }

    fn of(&self, severity: IssueSeverity) -> impl Iterator<Item = &CatalogIssue> {
        self.issues.iter().filter(move |i| i.severity == severity)
    }

    /// Warnings alone leave the catalog usable
    pub fn is_valid(&self) -> bool {
        self.errors().next().is_none()
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

impl fmt::Display for CatalogReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labelled = [(IssueSeverity::Error, "error"), (IssueSeverity::Warning, "warning")];
        for (severity, label) in labelled {
            for issue in self.of(severity) {
                writeln!(f, "{}: {}", label, issue)?;
            }
        }
        Ok(())
    }
}

/// Check the shipped catalog
pub fn validate_catalog() -> CatalogReport {
    validate_categories(categories())
}

/// Check unit tables for the invariants the engine relies on: every category
/// has a single identity base unit, every other unit an invertible affine map,
/// and no spelling resolves to two different units.
pub fn validate_categories(categories: &[Category]) -> CatalogReport {
    let mut report = CatalogReport::default();
    // spelling -> "category/unit" that first claimed it
    let mut owners: HashMap<String, String> = HashMap::new();

    for category in categories {
        let location = category.id.to_string();

        if category.units.len() < 2 {
            report.error(
                &location,
                format!(
                    "Category '{}' has {} unit(s); at least two are needed to convert",
                    category.name,
                    category.units.len()
                ),
            );
        }

        let base_count = category.units.iter().filter(|u| u.base).count();
        if base_count != 1 {
            report.error(
                &location,
                format!(
                    "Category '{}' must tag exactly one base unit, found {}",
                    category.name, base_count
                ),
            );
        }

        let mut seen_ids: Vec<&str> = Vec::new();
        for unit in category.units {
            let unit_location = format!("{}/{}", location, unit.id);

            if seen_ids.contains(&unit.id) {
                report.error(&unit_location, format!("Duplicate unit id '{}'", unit.id));
            }
            seen_ids.push(unit.id);

            check_unit_map(&mut report, &unit_location, unit);

            for spelling in spellings(unit) {
                match owners.get(&spelling) {
                    Some(owner) if *owner != unit_location => {
                        let message = format!(
                            "Alias '{}' resolves to both '{}' and '{}'",
                            spelling, owner, unit_location
                        );
                        report.error(&unit_location, message);
                    }
                    Some(_) => {}
                    None => {
                        owners.insert(spelling, unit_location.clone());
                    }
                }
            }
        }
    }

    report
}

fn check_unit_map(report: &mut CatalogReport, location: &str, unit: &Unit) {
    if unit.base && (unit.scale != 1.0 || unit.offset != 0.0) {
        report.error(
            location,
            format!(
                "Base unit '{}' must have scale 1 and offset 0 (scale {}, offset {})",
                unit.id, unit.scale, unit.offset
            ),
        );
    }

    if !unit.scale.is_finite() || unit.scale == 0.0 {
        report.error(
            location,
            format!("Unit '{}' has a non-invertible scale {}", unit.id, unit.scale),
        );
    }

    if !unit.offset.is_finite() {
        report.error(
            location,
            format!("Unit '{}' has a non-finite offset {}", unit.id, unit.offset),
        );
    }

    if unit.symbol.trim().is_empty() {
        report.warning(location, format!("Unit '{}' has no display symbol", unit.id));
    }
}
