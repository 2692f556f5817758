use proptest::prelude::*;
use value_rail::prelude::*;

proptest! {
    #[test]
    fn unwrapped_strings_are_accepted_again(input in "\\PC{0,40}") {
        let validator = StringValidator::new(StringOptions::new().trim(true).max_length(32)).unwrap();

        if let Ok(value) = validator.construct(&Raw::from(input.as_str())) {
            prop_assert_eq!(value.as_str(), input.trim());
            let again = validator.construct(&value.to_raw()).unwrap();
            prop_assert_eq!(again, value);
        }
    }

    #[test]
    fn string_length_matches_bounds(input in "[a-z]{0,12}") {
        let validator =
            StringValidator::new(StringOptions::new().min_length(3).max_length(8)).unwrap();
        let len = input.chars().count();

        prop_assert_eq!(validator.is_valid(&Raw::from(input.as_str())), (3..=8).contains(&len));
    }

    #[test]
    fn rounded_floats_are_stable(input in -1.0e12f64..1.0e12) {
        let validator = FloatValidator::new(FloatOptions::new().precision(2)).unwrap();

        let value = validator.construct(&Raw::from(input)).unwrap();
        let again = validator.construct(&value.to_raw()).unwrap();
        prop_assert_eq!(again.get(), value.get());
    }

    #[test]
    fn rounded_floats_stay_finite(input in prop::num::f64::NORMAL | prop::num::f64::SUBNORMAL | prop::num::f64::ZERO) {
        let validator = FloatValidator::new(FloatOptions::new().precision(10)).unwrap();

        let value = validator.construct(&Raw::from(input)).unwrap();
        prop_assert!(value.get().is_finite());
        let again = validator.construct(&value.to_raw()).unwrap();
        prop_assert!(again.get().is_finite());
    }

    #[test]
    fn integers_in_range_round_trip(input in -1_000_000i64..1_000_000) {
        let validator = IntegerValidator::new(IntegerOptions::new()).unwrap();

        let value = validator.construct(&Raw::from(input)).unwrap();
        prop_assert_eq!(value.get(), input);
        prop_assert_eq!(value.to_raw(), Raw::from(input));
    }
}
