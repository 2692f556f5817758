use value_rail::prelude::*;

fn id_or_slug() -> AnyOfValidator {
    AnyOfValidator::new([
        IntegerValidator::new(IntegerOptions::new().min(1)).unwrap().shared(),
        StringValidator::new(StringOptions::new().pattern("^[a-z-]+$")).unwrap().shared(),
    ])
    .unwrap()
}

#[test]
fn first_matching_candidate_wins() {
    let value = id_or_slug().construct(&Raw::from(7)).unwrap();
    assert_eq!(value.candidate(), 0);
    assert_eq!(value.downcast_ref::<IntegerValue>().map(|v| v.get()), Some(7));

    let value = id_or_slug().construct(&Raw::from("hello-world")).unwrap();
    assert_eq!(value.candidate(), 1);
    assert!(value.is::<StringValue>());
    assert_eq!(value.to_raw(), Raw::from("hello-world"));
}

#[test]
fn earlier_candidates_shadow_later_ones() {
    let loose = StringValidator::new(StringOptions::new()).unwrap();
    let strict = StringValidator::new(StringOptions::new().max_length(1)).unwrap();
    let union = AnyOfValidator::new([loose.shared(), strict.shared()]).unwrap();

    assert_eq!(union.construct(&Raw::from("a")).unwrap().candidate(), 0);
}

#[test]
fn failures_concatenate_candidate_errors_in_order() {
    let errors = id_or_slug().construct(&Raw::from("Not A Slug")).unwrap_err();
    assert_eq!(errors.codes(), ["raw_type_mismatch", "pattern_mismatch"]);

    let errors = id_or_slug().construct(&Raw::from(0)).unwrap_err();
    assert_eq!(errors.codes(), ["too_small", "raw_type_mismatch"]);
}

#[test]
fn nested_candidate_errors_keep_their_paths() {
    let union = AnyOfValidator::new([
        schema! { "id" => IntegerValidator::new(IntegerOptions::new()).unwrap() }.unwrap().shared(),
        StringValidator::new(StringOptions::new()).unwrap().shared(),
    ])
    .unwrap();

    let errors = union.construct(&Raw::object([("id", "x")])).unwrap_err();
    assert_eq!(errors.paths(), ["id", ""]);
}

#[test]
fn factory_rejects_empty_candidate_list() {
    assert!(matches!(
        AnyOfValidator::new(Vec::new()),
        Err(ConfigError::NoCandidates { min: 1, actual: 0 })
    ));
}

#[test]
fn unwraps_into_chosen_value_object() {
    let value = id_or_slug().construct(&Raw::from(3)).unwrap().into_inner();
    assert_eq!(value.to_raw(), Raw::from(3));
}
