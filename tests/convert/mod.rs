use value_rail::convert::*;
use value_rail::prelude::*;
use value_rail::types::ErrorVec;

fn word() -> StringValidator {
    StringValidator::new(StringOptions::new().min_length(2)).unwrap()
}

#[test]
fn try_construct_wraps_single_error_in_list() {
    let validation = try_construct(&word(), &Raw::from("x"));

    let errors: ErrorVec<ValidationError> = validation.into_errors().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code(), "too_short");
}

#[test]
fn try_construct_passes_lists_through_in_order() {
    let pair = ArrayValidator::new(word(), ArrayOptions::new().unbounded_errors()).unwrap();
    let validation = try_construct(&pair, &Raw::array([Raw::from(1), "a".into(), "ok".into(), Raw::Null]));

    let paths: Vec<String> = validation.iter_errors().map(|e| e.path().to_string()).collect();
    assert_eq!(paths, ["[0]", "[1]", "[3]"]);
}

#[test]
fn try_construct_keeps_value_on_success() {
    let validation = try_construct(&word(), &Raw::from("ok"));
    assert_eq!(validation.into_value().map(StringValue::into_string), Some("ok".to_string()));
}

#[test]
fn can_construct_matches_try_construct() {
    let validator = word();
    for raw in [Raw::from("ok"), Raw::from("x"), Raw::from(12), Raw::Null] {
        assert_eq!(can_construct(&validator, &raw), try_construct(&validator, &raw).is_valid());
        assert_eq!(validator.is_valid(&raw), can_construct(&validator, &raw));
    }
}

#[test]
fn works_through_erased_validators() {
    let shared: Validator = word().shared();
    assert!(can_construct(&shared, &Raw::from("ok")));
    assert_eq!(try_construct(&shared, &Raw::from(1)).iter_errors().count(), 1);
}

#[test]
fn validation_to_result_handles_both_variants() {
    let valid = Validation::<ValidationError, i32>::valid(7);
    assert_eq!(validation_to_result(valid), Ok(7));

    let invalid = Validation::<_, i32>::invalid(ValidationError::raw_type(RawKind::Number, RawKind::Null));
    assert_eq!(validation_to_result(invalid).unwrap_err().codes(), ["raw_type_mismatch"]);
}

#[test]
fn result_to_validation_accepts_single_errors_and_lists() {
    let single: Result<i32, ValidationError> = Err(ValidationError::raw_type(RawKind::String, RawKind::Null));
    assert_eq!(result_to_validation(single).iter_errors().count(), 1);

    let list: Result<i32, ValidationErrors> = Err(ValidationErrors::from_iter([
        ValidationError::raw_type(RawKind::String, RawKind::Null),
        ValidationError::raw_type(RawKind::String, RawKind::Boolean),
    ]));
    assert_eq!(result_to_validation(list).iter_errors().count(), 2);

    let ok: Result<i32, ValidationErrors> = Ok(3);
    assert_eq!(result_to_validation(ok).into_value(), Some(3));
}
