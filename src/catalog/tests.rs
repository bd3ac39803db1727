#[cfg(test)]
mod tests {
    use super::super::models::*;
    use super::super::registry::*;
    use super::super::validation::*;
    use proptest::prelude::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    fn all_units() -> Vec<(&'static Category, &'static Unit)> {
        categories()
            .iter()
            .flat_map(|c| c.units.iter().map(move |u| (c, u)))
            .collect()
    }

    #[test]
    fn test_shipped_catalog_is_valid() {
        let report = validate_catalog();
        assert!(report.is_valid(), "{}", report);
        assert!(report.is_clean(), "{}", report);
    }

    #[test]
    fn test_category_lookup_matches_id() {
        for id in CategoryId::ALL {
            assert_eq!(category(id).id, id);
        }
        assert_eq!(categories().len(), CategoryId::ALL.len());
        assert_eq!(find_category("Volume").unwrap().name, "Volume");
        assert!(find_category("time").is_err());
    }

    #[test]
    fn test_base_units() {
        let expected = [
            (CategoryId::Length, "meter"),
            (CategoryId::Weight, "kilogram"),
            (CategoryId::Temperature, "celsius"),
            (CategoryId::Area, "square_meter"),
            (CategoryId::Volume, "liter"),
            (CategoryId::Speed, "meter_per_second"),
        ];
        for (id, base) in expected {
            assert_eq!(category(id).base_unit().unwrap().id, base);
        }
    }

    #[test]
    fn test_default_pairs() {
        let (from, to) = category(CategoryId::Length).default_pair().unwrap();
        assert_eq!((from.id, to.id), ("meter", "centimeter"));
        let (from, to) = category(CategoryId::Temperature).default_pair().unwrap();
        assert_eq!((from.id, to.id), ("celsius", "fahrenheit"));
    }

    #[test]
    fn test_default_units_match_default_pairs() {
        for id in CategoryId::ALL {
            let (from, to) = default_units(id);
            let (pair_from, pair_to) = category(id).default_pair().unwrap();
            assert_eq!((from.id, to.id), (pair_from.id, pair_to.id), "{}", id);
        }
    }

    #[test]
    fn test_only_temperature_has_offsets() {
        for (category, unit) in all_units() {
            if category.id != CategoryId::Temperature {
                assert_eq!(unit.offset, 0.0, "{} has an offset", unit.id);
            }
        }
    }

    #[test]
    fn test_lookup_unit_spellings() {
        let (c, u) = lookup_unit("CM").unwrap();
        assert_eq!((c.id, u.id), (CategoryId::Length, "centimeter"));
        let (_, u) = lookup_unit("feet").unwrap();
        assert_eq!(u.id, "foot");
        let (_, u) = lookup_unit("nautical mile").unwrap();
        assert_eq!(u.id, "nautical_mile");
        let (c, u) = lookup_unit("mph").unwrap();
        assert_eq!((c.id, u.id), (CategoryId::Speed, "mile_per_hour"));
        assert!(lookup_unit("furlong").is_none());
    }

    #[test]
    fn test_lookup_unit_in_category() {
        let length = category(CategoryId::Length);
        assert_eq!(lookup_unit_in(length, "km").unwrap().id, "kilometer");
        assert_eq!(lookup_unit_in(length, "inch").unwrap().id, "inch");
        assert!(lookup_unit_in(length, "kg").is_none());
    }

    #[test]
    fn test_validation_reports_broken_category() {
        static BROKEN: [Unit; 2] = [
            Unit::scaled("a", "A", "a", 2.0),
            Unit::scaled("a", "A again", "", 0.0),
        ];
        let broken = [Category {
            id: CategoryId::Length,
            name: "Broken",
            units: &BROKEN,
        }];

        let report = validate_categories(&broken);
        assert!(!report.is_valid());
        let messages: Vec<&str> = report.errors().map(|e| e.message.as_str()).collect();
        assert!(messages.iter().any(|m| m.contains("exactly one base unit")));
        assert!(messages.iter().any(|m| m.contains("Duplicate unit id")));
        assert!(messages.iter().any(|m| m.contains("non-invertible scale")));
        assert_eq!(report.warnings().count(), 1);
        assert!(report.to_string().contains("warning: [length/a]"));
        assert!(report.to_string().starts_with("error: [length]"));
    }

    #[test]
    fn test_validation_reports_single_unit_category() {
        static LONELY: [Unit; 1] = [Unit::base("only", "Only", "o")];
        let lonely = [Category {
            id: CategoryId::Area,
            name: "Lonely",
            units: &LONELY,
        }];
        let report = validate_categories(&lonely);
        assert_eq!(report.issues().len(), 1);
        assert_eq!(report.issues()[0].severity, IssueSeverity::Error);
        assert_eq!(report.issues()[0].location, "area");
        assert!(report.issues()[0].message.contains("at least two"));
    }

    proptest! {
        #[test]
        fn prop_unit_round_trip(x in -1.0e9f64..1.0e9) {
            for (_, unit) in all_units() {
                let back = unit.from_base(unit.to_base(x));
                prop_assert!(close(back, x), "{}: {} -> {}", unit.id, x, back);
            }
        }

        #[test]
        fn prop_base_identity(x in proptest::num::f64::NORMAL) {
            for category in categories() {
                let base = category.base_unit().unwrap();
                prop_assert_eq!(base.to_base(x), x);
                prop_assert_eq!(base.from_base(x), x);
            }
        }
    }
}
