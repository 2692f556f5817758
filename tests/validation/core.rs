use value_rail::validation::Validation;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[test]
fn map_transforms_valid_value() {
    let result = Validation::<&str, i32>::valid(4).map(|x| x * 2);
    assert_eq!(result.into_value(), Some(8));
}

#[test]
fn map_skips_invalid() {
    let v: Validation<&str, i32> = Validation::invalid("error");
    let mapped = v.map(|x| x * 2);
    assert_eq!(mapped.into_errors().unwrap().as_slice(), ["error"]);
}

#[test]
fn iter_errors_is_empty_when_valid() {
    let valid: Validation<&str, i32> = Validation::valid(1);
    assert_eq!(valid.iter_errors().count(), 0);

    let invalid: Validation<&str, i32> = Validation::invalid("error");
    assert_eq!(invalid.iter_errors().copied().collect::<Vec<_>>(), ["error"]);
}

#[test]
fn into_errors_and_into_value_are_exclusive() {
    let v: Validation<&str, i32> = Validation::valid(42);
    assert!(v.clone().into_errors().is_none());
    assert_eq!(v.into_value(), Some(42));

    let v: Validation<&str, i32> = Validation::invalid("error");
    assert!(v.clone().into_value().is_none());
    assert!(v.into_errors().is_some());
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize, PartialEq, Debug)]
struct TestData {
    id: i32,
}

#[test]
#[cfg(feature = "serde")]
fn validation_serde_round_trip() {
    let valid = Validation::<String, TestData>::valid(TestData { id: 1 });
    let serialized = serde_json::to_string(&valid).unwrap();
    let deserialized: Validation<String, TestData> = serde_json::from_str(&serialized).unwrap();
    assert_eq!(valid, deserialized);

    let invalid = Validation::<String, TestData>::invalid("error".to_string());
    let serialized = serde_json::to_string(&invalid).unwrap();
    let deserialized: Validation<String, TestData> = serde_json::from_str(&serialized).unwrap();
    assert_eq!(invalid, deserialized);
}
