use value_rail::prelude::*;

fn percentage() -> FloatValidator {
    FloatValidator::new(FloatOptions::new().min(0.0).max(100.0).precision(2).rounding(Rounding::Round))
        .unwrap()
}

#[test]
fn rounding_happens_before_range_checks() {
    let value = percentage().construct(&Raw::from(99.995)).unwrap();
    assert_eq!(value.get(), 100.0);
    assert_eq!(value.to_raw(), Raw::from(100));

    let error = percentage().construct(&Raw::from(100.006)).unwrap_err();
    assert_eq!(error.kind(), &ErrorKind::TooBig { max: 100.0, actual: 100.01 });
}

#[test]
fn rounding_modes_differ() {
    let with = |rounding| {
        FloatValidator::new(FloatOptions::new().precision(1).rounding(rounding))
            .unwrap()
            .construct(&Raw::from(1.25))
            .unwrap()
            .get()
    };

    assert_eq!(with(Rounding::Floor), 1.2);
    assert_eq!(with(Rounding::Ceil), 1.3);
    assert_eq!(with(Rounding::Round), 1.3);
}

#[test]
fn negative_values_round_per_mode() {
    let floor = FloatValidator::new(FloatOptions::new().precision(0).rounding(Rounding::Floor)).unwrap();
    assert_eq!(floor.construct(&Raw::from(-1.5)).unwrap().get(), -2.0);

    let round = FloatValidator::new(FloatOptions::new().precision(0)).unwrap();
    assert_eq!(round.construct(&Raw::from(-1.5)).unwrap().get(), -1.0);
    assert_eq!(round.construct(&Raw::from(-2.5)).unwrap().get(), -2.0);
    assert_eq!(round.construct(&Raw::from(2.5)).unwrap().get(), 3.0);
    assert_eq!(round.construct(&Raw::from(-2.6)).unwrap().get(), -3.0);
    assert_eq!(round.construct(&Raw::from(0.49999999999999994)).unwrap().get(), 0.0);
}

#[test]
fn negative_half_rounds_up_to_zero() {
    let non_negative =
        FloatValidator::new(FloatOptions::new().min(0.0).precision(0)).unwrap();

    let value = non_negative.construct(&Raw::from(-0.5)).unwrap();
    assert_eq!(value.get(), 0.0);
    assert!(value.get().is_sign_negative());
}

#[test]
fn huge_values_skip_scaling() {
    let fine = FloatValidator::new(FloatOptions::new().precision(10)).unwrap();

    let value = fine.construct(&Raw::from(1e300)).unwrap();
    assert_eq!(value.get(), 1e300);
    assert_eq!(fine.construct(&value.to_raw()).unwrap(), value);

    let value = fine.construct(&Raw::from(-f64::MAX)).unwrap();
    assert_eq!(value.get(), -f64::MAX);
}

#[test]
fn integral_values_beyond_scaling_range_are_kept() {
    let cents = FloatValidator::new(FloatOptions::new().precision(2)).unwrap();
    assert_eq!(cents.construct(&Raw::from(1e17)).unwrap().get(), 1e17);
}

#[test]
fn without_precision_values_are_kept() {
    let any = FloatValidator::new(FloatOptions::new()).unwrap();
    assert_eq!(any.construct(&Raw::from(0.1 + 0.2)).unwrap().get(), 0.1 + 0.2);
}

#[test]
fn non_finite_input_is_rejected() {
    let any = FloatValidator::new(FloatOptions::new()).unwrap();
    assert_eq!(any.construct(&Raw::from(f64::NAN)).unwrap_err().code(), "not_finite");
    assert_eq!(any.construct(&Raw::from(f64::NEG_INFINITY)).unwrap_err().code(), "not_finite");
}

#[test]
fn rejects_non_numbers() {
    assert_eq!(percentage().construct(&Raw::from("1")).unwrap_err().code(), "raw_type_mismatch");
}

#[test]
fn lower_bound_is_inclusive() {
    assert!(percentage().is_valid(&Raw::from(0)));
    assert!(percentage().is_valid(&Raw::from(-0.004)));
    assert_eq!(percentage().construct(&Raw::from(-0.006)).unwrap_err().code(), "too_small");
}

#[test]
fn factory_validates_options() {
    assert!(matches!(
        FloatValidator::new(FloatOptions::new().min(f64::NAN)),
        Err(ConfigError::NonFiniteBound { option: "min", .. })
    ));
    assert!(matches!(
        FloatValidator::new(FloatOptions::new().min(2.0).max(1.0)),
        Err(ConfigError::InvertedBounds { .. })
    ));
    assert!(matches!(
        FloatValidator::new(FloatOptions::new().precision(16)),
        Err(ConfigError::PrecisionTooLarge { precision: 16, max: 15 })
    ));
}

#[cfg(feature = "serde")]
#[test]
fn options_deserialize_with_precision_trim_alias() {
    let options: FloatOptions = serde_json::from_str(
        r#"{ "min": 0, "max": 100, "precision": 2, "precisionTrim": "floor" }"#,
    )
    .unwrap();

    assert_eq!(options.rounding, Rounding::Floor);
    assert_eq!(options.precision, Some(2));
}
