// Compiled-in conversion catalog and its lookup indexes

use crate::catalog::models::{Category, CategoryId, Unit};
use crate::engine::error::ConversionError;
use lazy_static::lazy_static;
use std::collections::HashMap;

// Order matters: the first two units of each list are the selection defaults.

static LENGTH_UNITS: [Unit; 9] = [
    Unit::base("meter", "Meter", "m").with_aliases(&["meters", "metre", "metres"]),
    Unit::scaled("centimeter", "Centimeter", "cm", 0.01)
        .with_aliases(&["centimeters", "centimetre", "centimetres"]),
    Unit::scaled("millimeter", "Millimeter", "mm", 0.001)
        .with_aliases(&["millimeters", "millimetre", "millimetres"]),
    Unit::scaled("kilometer", "Kilometer", "km", 1000.0)
        .with_aliases(&["kilometers", "kilometre", "kilometres"]),
    Unit::scaled("inch", "Inch", "in", 0.0254).with_aliases(&["inches", "\""]),
    Unit::scaled("foot", "Foot", "ft", 0.3048).with_aliases(&["feet", "'"]),
    Unit::scaled("yard", "Yard", "yd", 0.9144).with_aliases(&["yards"]),
    Unit::scaled("mile", "Mile", "mi", 1609.344).with_aliases(&["miles"]),
    Unit::scaled("nautical_mile", "Nautical Mile", "nmi", 1852.0)
        .with_aliases(&["nautical miles"]),
];

static WEIGHT_UNITS: [Unit; 7] = [
    Unit::base("kilogram", "Kilogram", "kg").with_aliases(&["kilograms", "kilo", "kilos"]),
    Unit::scaled("gram", "Gram", "g", 0.001).with_aliases(&["grams"]),
    Unit::scaled("milligram", "Milligram", "mg", 0.000001).with_aliases(&["milligrams"]),
    Unit::scaled("tonne", "Metric Ton", "t", 1000.0)
        .with_aliases(&["tonnes", "metric ton", "metric tons"]),
    Unit::scaled("pound", "Pound", "lb", 0.45359237).with_aliases(&["pounds", "lbs"]),
    Unit::scaled("ounce", "Ounce", "oz", 0.028349523125).with_aliases(&["ounces"]),
    Unit::scaled("stone", "Stone", "st", 6.35029318).with_aliases(&["stones"]),
];

static TEMPERATURE_UNITS: [Unit; 3] = [
    Unit::base("celsius", "Celsius", "°C").with_aliases(&["c", "degc", "centigrade"]),
    Unit::affine("fahrenheit", "Fahrenheit", "°F", 5.0 / 9.0, -160.0 / 9.0)
        .with_aliases(&["f", "degf"]),
    Unit::affine("kelvin", "Kelvin", "K", 1.0, -273.15).with_aliases(&["kelvins"]),
];

static AREA_UNITS: [Unit; 9] = [
    Unit::base("square_meter", "Square Meter", "m²")
        .with_aliases(&["m2", "sq m", "square meters", "square metre", "square metres"]),
    Unit::scaled("square_foot", "Square Foot", "ft²", 0.09290304)
        .with_aliases(&["ft2", "sq ft", "square feet"]),
    Unit::scaled("square_kilometer", "Square Kilometer", "km²", 1_000_000.0)
        .with_aliases(&["km2", "sq km", "square kilometers"]),
    Unit::scaled("square_centimeter", "Square Centimeter", "cm²", 0.0001)
        .with_aliases(&["cm2", "sq cm", "square centimeters"]),
    Unit::scaled("square_inch", "Square Inch", "in²", 0.00064516)
        .with_aliases(&["in2", "sq in", "square inches"]),
    Unit::scaled("square_yard", "Square Yard", "yd²", 0.83612736)
        .with_aliases(&["yd2", "sq yd", "square yards"]),
    Unit::scaled("square_mile", "Square Mile", "mi²", 2_589_988.110336)
        .with_aliases(&["mi2", "sq mi", "square miles"]),
    Unit::scaled("acre", "Acre", "ac", 4046.8564224).with_aliases(&["acres"]),
    Unit::scaled("hectare", "Hectare", "ha", 10_000.0).with_aliases(&["hectares"]),
];

static VOLUME_UNITS: [Unit; 11] = [
    Unit::base("liter", "Liter", "L").with_aliases(&["liters", "litre", "litres"]),
    Unit::scaled("milliliter", "Milliliter", "mL", 0.001)
        .with_aliases(&["milliliters", "millilitre", "millilitres"]),
    Unit::scaled("cubic_meter", "Cubic Meter", "m³", 1000.0)
        .with_aliases(&["m3", "cubic meters", "cubic metre", "cubic metres"]),
    Unit::scaled("gallon", "Gallon (US)", "gal", 3.785411784).with_aliases(&["gallons"]),
    Unit::scaled("quart", "Quart (US)", "qt", 0.946352946).with_aliases(&["quarts"]),
    Unit::scaled("pint", "Pint (US)", "pt", 0.473176473).with_aliases(&["pints"]),
    Unit::scaled("cup", "Cup (US)", "cup", 0.2365882365).with_aliases(&["cups"]),
    Unit::scaled("fluid_ounce", "Fluid Ounce (US)", "fl oz", 0.0295735295625)
        .with_aliases(&["floz", "fl-oz", "fluid ounces"]),
    Unit::scaled("tablespoon", "Tablespoon (US)", "tbsp", 0.01478676478125)
        .with_aliases(&["tablespoons"]),
    Unit::scaled("teaspoon", "Teaspoon (US)", "tsp", 0.00492892159375)
        .with_aliases(&["teaspoons"]),
    Unit::scaled("cubic_foot", "Cubic Foot", "ft³", 28.316846592)
        .with_aliases(&["ft3", "cubic feet"]),
];

static SPEED_UNITS: [Unit; 5] = [
    Unit::base("meter_per_second", "Meter per Second", "m/s")
        .with_aliases(&["mps", "meters per second"]),
    Unit::scaled("kilometer_per_hour", "Kilometer per Hour", "km/h", 1.0 / 3.6)
        .with_aliases(&["kmh", "kph", "kilometers per hour"]),
    Unit::scaled("mile_per_hour", "Mile per Hour", "mph", 0.44704)
        .with_aliases(&["mi/h", "miles per hour"]),
    Unit::scaled("foot_per_second", "Foot per Second", "ft/s", 0.3048)
        .with_aliases(&["fps", "feet per second"]),
    Unit::scaled("knot", "Knot", "kn", 1852.0 / 3600.0).with_aliases(&["knots", "kt"]),
];

static CATALOG: [Category; 6] = [
    Category {
        id: CategoryId::Length,
        name: "Length",
        units: &LENGTH_UNITS,
    },
    Category {
        id: CategoryId::Weight,
        name: "Weight",
        units: &WEIGHT_UNITS,
    },
    Category {
        id: CategoryId::Temperature,
        name: "Temperature",
        units: &TEMPERATURE_UNITS,
    },
    Category {
        id: CategoryId::Area,
        name: "Area",
        units: &AREA_UNITS,
    },
    Category {
        id: CategoryId::Volume,
        name: "Volume",
        units: &VOLUME_UNITS,
    },
    Category {
        id: CategoryId::Speed,
        name: "Speed",
        units: &SPEED_UNITS,
    },
];

/// Every spelling a unit answers to, lowercased.
pub fn spellings(unit: &Unit) -> Vec<String> {
    let mut names = vec![
        unit.id.to_lowercase(),
        unit.id.replace('_', " "),
        unit.symbol.to_lowercase(),
        unit.name.to_lowercase(),
    ];
    names.extend(unit.aliases.iter().map(|a| a.to_lowercase()));
    names.sort();
    names.dedup();
    names
}

lazy_static! {
    // First registration wins on a clash; validate_catalog reports clashes.
    static ref ALIAS_INDEX: HashMap<String, (CategoryId, &'static Unit)> = {
        let mut index = HashMap::new();
        for category in CATALOG.iter() {
            for unit in category.units {
                for spelling in spellings(unit) {
                    index.entry(spelling).or_insert((category.id, unit));
                }
            }
        }
        index
    };
}

pub fn categories() -> &'static [Category] {
    &CATALOG
}

pub fn category(id: CategoryId) -> &'static Category {
    match id {
        CategoryId::Length => &CATALOG[0],
        CategoryId::Weight => &CATALOG[1],
        CategoryId::Temperature => &CATALOG[2],
        CategoryId::Area => &CATALOG[3],
        CategoryId::Volume => &CATALOG[4],
        CategoryId::Speed => &CATALOG[5],
    }
}

/// Default from/to units of a shipped category. Indexes the fixed-size
/// tables directly, so an empty table fails to compile.
pub fn default_units(id: CategoryId) -> (&'static Unit, &'static Unit) {
    match id {
        CategoryId::Length => (&LENGTH_UNITS[0], &LENGTH_UNITS[1]),
        CategoryId::Weight => (&WEIGHT_UNITS[0], &WEIGHT_UNITS[1]),
        CategoryId::Temperature => (&TEMPERATURE_UNITS[0], &TEMPERATURE_UNITS[1]),
        CategoryId::Area => (&AREA_UNITS[0], &AREA_UNITS[1]),
        CategoryId::Volume => (&VOLUME_UNITS[0], &VOLUME_UNITS[1]),
        CategoryId::Speed => (&SPEED_UNITS[0], &SPEED_UNITS[1]),
    }
}

/// Resolve a category from user text ("length", "Weight", ...)
pub fn find_category(name: &str) -> Result<&'static Category, ConversionError> {
    let id: CategoryId = name.parse()?;
    Ok(category(id))
}

/// Resolve a unit anywhere in the catalog by id, symbol, name or alias.
pub fn lookup_unit(alias: &str) -> Option<(&'static Category, &'static Unit)> {
    let key = alias.trim().to_lowercase();
    ALIAS_INDEX
        .get(&key)
        .map(|(id, unit)| (category(*id), *unit))
}

/// Resolve a unit inside one category, accepting the same spellings as
/// `lookup_unit` so that "cm" and "centimeter" both select centimeters.
pub fn lookup_unit_in(category: &'static Category, alias: &str) -> Option<&'static Unit> {
    if let Some(unit) = category.unit(alias) {
        return Some(unit);
    }
    let key = alias.trim().to_lowercase();
    category
        .units
        .iter()
        .find(|unit| spellings(unit).contains(&key))
}
