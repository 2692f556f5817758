use value_rail::prelude::*;
use value_rail::tracing_ext::{record_errors, Traced};

#[test]
fn traced_validator_behaves_like_inner() {
    let name = StringValidator::new(StringOptions::new().trim(true).min_length(2))
        .unwrap()
        .traced("user.name");

    assert_eq!(name.name(), "user.name");
    assert_eq!(name.construct(&Raw::from(" Ada ")).unwrap().as_str(), "Ada");

    let errors = name.construct(&Raw::from("A")).unwrap_err();
    assert_eq!(errors.codes(), ["too_short"]);
}

#[test]
fn traced_composites_keep_paths() {
    let users = Traced::new(
        ArrayValidator::new(
            schema! { "age" => IntegerValidator::new(IntegerOptions::new().min(0)).unwrap() }.unwrap(),
            ArrayOptions::new(),
        )
        .unwrap(),
        "users",
    );

    let errors = users.construct(&Raw::array([Raw::object([("age", -1)])])).unwrap_err();
    assert_eq!(errors.paths(), ["[0].age"]);
    assert_eq!(users.into_inner().options().max_errors, Some(1));
}

#[test]
fn recording_without_subscriber_is_silent() {
    let errors = ValidationErrors::from(ValidationError::raw_type(RawKind::String, RawKind::Null));
    record_errors(&errors);
    assert_eq!(errors.len(), 1);
}
