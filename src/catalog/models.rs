use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::engine::error::ConversionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryId {
    Length,
    Weight,
    Temperature,
    Area,
    Volume,
    Speed,
}

impl CategoryId {
    pub const ALL: [CategoryId; 6] = [
        CategoryId::Length,
        CategoryId::Weight,
        CategoryId::Temperature,
        CategoryId::Area,
        CategoryId::Volume,
        CategoryId::Speed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryId::Length => "length",
            CategoryId::Weight => "weight",
            CategoryId::Temperature => "temperature",
            CategoryId::Area => "area",
            CategoryId::Volume => "volume",
            CategoryId::Speed => "speed",
        }
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryId {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        CategoryId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == wanted)
            .ok_or_else(|| ConversionError::UnknownCategory(s.to_string()))
    }
}

/// A unit as an affine map into its category's base unit:
/// `base = raw * scale + offset`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Unit {
    pub id: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
    #[serde(skip)]
    pub aliases: &'static [&'static str],
    pub scale: f64,
    pub offset: f64,
    pub base: bool,
}

impl Unit {
    /// The reference unit of a category. Identity in both directions.
    pub const fn base(id: &'static str, name: &'static str, symbol: &'static str) -> Self {
        Self {
            id,
            name,
            symbol,
            aliases: &[],
            scale: 1.0,
            offset: 0.0,
            base: true,
        }
    }

    /// `scale` is the size of one of these units expressed in the base unit.
    pub const fn scaled(
        id: &'static str,
        name: &'static str,
        symbol: &'static str,
        scale: f64,
    ) -> Self {
        Self {
            id,
            name,
            symbol,
            aliases: &[],
            scale,
            offset: 0.0,
            base: false,
        }
    }

    pub const fn affine(
        id: &'static str,
        name: &'static str,
        symbol: &'static str,
        scale: f64,
        offset: f64,
    ) -> Self {
        Self {
            id,
            name,
            symbol,
            aliases: &[],
            scale,
            offset,
            base: false,
        }
    }

    pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    pub fn to_base(&self, value: f64) -> f64 {
        if self.base {
            return value;
        }
        value * self.scale + self.offset
    }

    pub fn from_base(&self, value: f64) -> f64 {
        if self.base {
            return value;
        }
        (value - self.offset) / self.scale
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: &'static str,
    pub units: &'static [Unit],
}

impl Category {
    pub fn unit(&self, id: &str) -> Option<&'static Unit> {
        self.units.iter().find(|u| u.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.unit(id).is_some()
    }

    pub fn base_unit(&self) -> Option<&'static Unit> {
        self.units.iter().find(|u| u.base)
    }

    /// Default from/to pair: the first two units, or the first unit twice
    /// when the category only has one. `None` for a category with no units.
    pub fn default_pair(&self) -> Option<(&'static Unit, &'static Unit)> {
        let first = self.units.first()?;
        let second = self.units.get(1).unwrap_or(first);
        Some((first, second))
    }
}
