use proptest::prelude::*;
use value_rail::prelude::*;

fn digits() -> StringValidator {
    StringValidator::new(StringOptions::new().pattern("^[0-9]+$")).unwrap()
}

proptest! {
    #[test]
    fn array_length_bounds_are_inclusive(len in 0usize..12) {
        let validator =
            ArrayValidator::new(digits(), ArrayOptions::new().min_length(2).max_length(8)).unwrap();
        let raw = Raw::array(vec!["1"; len]);

        prop_assert_eq!(validator.is_valid(&raw), (2..=8).contains(&len));
    }

    #[test]
    fn array_reports_min_of_limit_and_failures(
        items in prop::collection::vec(prop::bool::ANY, 0..20),
        max_errors in 1usize..6,
    ) {
        let validator = ArrayValidator::new(digits(), ArrayOptions::new().max_errors(max_errors)).unwrap();
        let raw = Raw::array(items.iter().map(|ok| if *ok { "1" } else { "x" }));
        let failures: Vec<String> = items
            .iter()
            .enumerate()
            .filter(|(_, ok)| !**ok)
            .map(|(index, _)| format!("[{index}]"))
            .collect();

        match validator.construct(&raw) {
            Ok(value) => {
                prop_assert!(failures.is_empty());
                prop_assert_eq!(value.len(), items.len());
            },
            Err(errors) => {
                let expected = &failures[..failures.len().min(max_errors)];
                prop_assert_eq!(errors.paths(), expected);
            },
        }
    }

    #[test]
    fn object_never_exceeds_its_limit(
        values in prop::collection::vec("[0-9x]{1,3}", 1..8),
        max_errors in 1usize..4,
    ) {
        let fields: Vec<(String, Validator)> =
            (0..values.len()).map(|i| (format!("f{i}"), digits().shared())).collect();
        let validator =
            ObjectValidator::new(fields, ObjectOptions::new().max_errors(max_errors)).unwrap();
        let raw = Raw::object(values.iter().enumerate().map(|(i, v)| (format!("f{i}"), v.as_str())));
        let failing = values.iter().filter(|v| v.contains('x')).count();

        match validator.construct(&raw) {
            Ok(_) => prop_assert_eq!(failing, 0),
            Err(errors) => prop_assert_eq!(errors.len(), failing.min(max_errors)),
        }
    }
}
