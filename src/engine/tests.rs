#[cfg(test)]
mod tests {
    use super::super::convert::*;
    use super::super::error::ConversionError;
    use super::super::formatter::DEFAULT_PRECISION;
    use crate::catalog::models::CategoryId;
    use crate::catalog::registry::{categories, category};
    use proptest::prelude::*;

    fn display(id: CategoryId, from: &str, to: &str, raw: &str) -> String {
        convert(category(id), from, to, raw, DEFAULT_PRECISION)
            .unwrap()
            .display
    }

    #[test]
    fn test_meter_to_centimeter() {
        assert_eq!(display(CategoryId::Length, "meter", "centimeter", "1"), "100");
    }

    #[test]
    fn test_celsius_to_fahrenheit() {
        assert_eq!(display(CategoryId::Temperature, "celsius", "fahrenheit", "0"), "32");
        assert_eq!(display(CategoryId::Temperature, "celsius", "fahrenheit", "-40"), "-40");
    }

    #[test]
    fn test_fahrenheit_to_celsius() {
        assert_eq!(display(CategoryId::Temperature, "fahrenheit", "celsius", "212"), "100");
        assert_eq!(display(CategoryId::Temperature, "kelvin", "celsius", "0"), "-273.15");
    }

    #[test]
    fn test_kilogram_to_pound() {
        assert_eq!(display(CategoryId::Weight, "kilogram", "pound", "1"), "2.204623");
    }

    #[test]
    fn test_square_meter_to_square_foot() {
        assert_eq!(display(CategoryId::Area, "square_meter", "square_foot", "1"), "10.76391");
    }

    #[test]
    fn test_volume_and_speed() {
        assert_eq!(display(CategoryId::Volume, "gallon", "liter", "1"), "3.785412");
        assert_eq!(display(CategoryId::Volume, "liter", "milliliter", "2.5"), "2500");
        assert_eq!(
            display(CategoryId::Speed, "kilometer_per_hour", "meter_per_second", "36"),
            "10"
        );
    }

    #[test]
    fn test_units_accept_symbols() {
        assert_eq!(display(CategoryId::Length, "km", "mi", "1.609344"), "1");
    }

    #[test]
    fn test_full_precision_is_kept() {
        let result = convert(category(CategoryId::Weight), "kilogram", "pound", "1", 2).unwrap();
        assert_eq!(result.display, "2.2");
        assert!((result.value - 2.2046226218487757).abs() < 1e-12);
        assert_eq!(result.input, 1.0);
        assert_eq!(result.from.id, "kilogram");
        assert_eq!(result.to.id, "pound");
    }

    #[test]
    fn test_unknown_unit() {
        let length = category(CategoryId::Length);
        assert_eq!(
            convert(length, "meter", "kilogram", "1", DEFAULT_PRECISION),
            Err(ConversionError::UnknownUnit {
                category: Some(CategoryId::Length),
                unit: "kilogram".to_string(),
            })
        );
        assert!(matches!(
            convert_value(length, "parsec", "meter", 1.0),
            Err(ConversionError::UnknownUnit { .. })
        ));
    }

    #[test]
    fn test_bad_input() {
        let length = category(CategoryId::Length);
        assert_eq!(
            convert(length, "meter", "centimeter", "", DEFAULT_PRECISION),
            Err(ConversionError::EmptyInput)
        );
        assert!(matches!(
            convert(length, "meter", "centimeter", "ten", DEFAULT_PRECISION),
            Err(ConversionError::InvalidNumber(s)) if s == "ten"
        ));
    }

    #[test]
    fn test_overflow() {
        let length = category(CategoryId::Length);
        assert_eq!(
            convert(length, "mile", "millimeter", "1e305", DEFAULT_PRECISION),
            Err(ConversionError::NonFiniteResult)
        );
    }

    #[test]
    fn test_convert_quantity() {
        let result = convert_quantity("5 ft", "in", DEFAULT_PRECISION).unwrap();
        assert_eq!(result.display, "60");

        let result = convert_quantity("98.6 °F", "celsius", DEFAULT_PRECISION).unwrap();
        assert_eq!(result.display, "37");

        assert_eq!(
            convert_quantity("5 kg", "liter", DEFAULT_PRECISION),
            Err(ConversionError::CategoryMismatch {
                from: CategoryId::Weight,
                to: CategoryId::Volume,
            })
        );
        assert!(matches!(
            convert_quantity("5 kg", "stones of power", DEFAULT_PRECISION),
            Err(ConversionError::UnknownUnit { category: None, .. })
        ));
    }

    proptest! {
        #[test]
        fn prop_cross_unit_round_trip(x in -1.0e6f64..1.0e6) {
            for category in categories() {
                for a in category.units {
                    for b in category.units {
                        let there = convert_value(category, a.id, b.id, x).unwrap();
                        let back = convert_value(category, b.id, a.id, there).unwrap();
                        prop_assert!(
                            (back - x).abs() <= 1e-6 * x.abs().max(1.0),
                            "{} -> {} -> {}: {} came back as {}", a.id, b.id, a.id, x, back
                        );
                    }
                }
            }
        }
    }
}
