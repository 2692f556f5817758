use value_rail::prelude::*;

fn age() -> IntegerValidator {
    IntegerValidator::new(IntegerOptions::new().min(0).max(150)).unwrap()
}

#[test]
fn accepts_whole_numbers_in_range() {
    let value = age().construct(&Raw::from(42)).unwrap();
    assert_eq!(value.get(), 42);
    assert_eq!(value.to_raw(), Raw::from(42));
    assert!(age().is_valid(&Raw::from(0)));
    assert!(age().is_valid(&Raw::from(150)));
}

#[test]
fn rejects_non_numbers() {
    let error = age().construct(&Raw::from("42")).unwrap_err();
    assert_eq!(error.to_string(), "Wrong raw value type: expected number, got string");
}

#[test]
fn range_is_checked_before_integrality() {
    assert_eq!(age().construct(&Raw::from(150.5)).unwrap_err().code(), "too_big");
    assert_eq!(age().construct(&Raw::from(-0.5)).unwrap_err().code(), "too_small");
    assert_eq!(
        age().construct(&Raw::from(36.6)).unwrap_err().kind(),
        &ErrorKind::NotInteger { value: 36.6 }
    );
}

#[test]
fn unbounded_validator_rejects_non_finite_and_out_of_range() {
    let any = IntegerValidator::new(IntegerOptions::new()).unwrap();

    assert_eq!(any.construct(&Raw::from(f64::NAN)).unwrap_err().code(), "not_integer");
    assert_eq!(any.construct(&Raw::from(f64::INFINITY)).unwrap_err().code(), "not_integer");
    assert_eq!(any.construct(&Raw::from(1e19)).unwrap_err().code(), "not_integer");
    assert_eq!(any.construct(&Raw::from(-9_007_199_254_740_993i64)).unwrap().get(), -9_007_199_254_740_992);
}

#[test]
fn bounds_report_configured_limits() {
    assert_eq!(
        age().construct(&Raw::from(200)).unwrap_err().kind(),
        &ErrorKind::TooBig { max: 150.0, actual: 200.0 }
    );
}

#[test]
fn factory_rejects_inverted_bounds() {
    assert_eq!(
        IntegerValidator::new(IntegerOptions::new().min(10).max(1)).unwrap_err().code(),
        "inverted_bounds"
    );
}
