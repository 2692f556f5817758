use value_rail::library::Email;
use value_rail::prelude::*;

fn user_schema(options: ObjectOptions) -> ObjectValidator {
    schema! {
        options;
        "name" => StringValidator::new(StringOptions::new().trim(true).min_length(1)).unwrap(),
        "age" => IntegerValidator::new(IntegerOptions::new().min(0)).unwrap(),
        "email" => Email::new(),
    }
    .unwrap()
}

#[test]
fn builds_fields_in_schema_order() {
    let raw = Raw::object([
        ("email", Raw::from("ada@example.com")),
        ("age", 36.into()),
        ("name", " Ada ".into()),
    ]);
    let value = user_schema(ObjectOptions::new()).construct(&raw).unwrap();

    let names: Vec<&str> = value.iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["name", "age", "email"]);
    assert_eq!(value.field::<StringValue>("name").unwrap().as_str(), "Ada");
    assert_eq!(value.field::<IntegerValue>("age").unwrap().get(), 36);
    assert!(value.field::<StringValue>("age").is_none());
    assert!(value.get("unknown").is_none());
}

#[test]
fn unknown_members_are_ignored() {
    let raw = Raw::object([
        ("name", Raw::from("Ada")),
        ("age", 36.into()),
        ("email", "ada@example.com".into()),
        ("admin", true.into()),
    ]);
    let value = user_schema(ObjectOptions::new()).construct(&raw).unwrap();

    assert_eq!(value.len(), 3);
    assert_eq!(value.to_raw().member("admin"), &Raw::Undefined);
}

#[test]
fn rejects_non_objects() {
    for raw in [Raw::Null, Raw::array(Vec::<Raw>::new()), Raw::from("{}")] {
        let errors = user_schema(ObjectOptions::new()).construct(&raw).unwrap_err();
        assert_eq!(errors.codes(), ["raw_type_mismatch"]);
        assert!(errors[0].path().is_root());
    }
}

#[test]
fn missing_fields_are_validated_as_undefined() {
    let errors = user_schema(ObjectOptions::new().unbounded_errors())
        .construct(&Raw::object([("name", "Ada")]))
        .unwrap_err();

    assert_eq!(errors.paths(), ["age", "email"]);
    assert_eq!(
        errors[0].to_string(),
        "age: Wrong raw value type: expected number, got undefined"
    );
}

#[test]
fn max_errors_limits_collected_fields() {
    let raw = Raw::object([("name", Raw::from("")), ("age", (-1).into())]);

    let errors = user_schema(ObjectOptions::new()).construct(&raw).unwrap_err();
    assert_eq!(errors.paths(), ["name"]);

    let errors = user_schema(ObjectOptions::new().max_errors(2)).construct(&raw).unwrap_err();
    assert_eq!(errors.codes(), ["too_short", "too_small"]);
}

#[test]
fn nested_paths_join_keys_and_indices() {
    let users = ArrayValidator::new(user_schema(ObjectOptions::new()), ArrayOptions::new()).unwrap();
    let team = schema! { "users" => users }.unwrap();

    let valid = Raw::object([("name", Raw::from("x")), ("age", 1.into()), ("email", "x@y.io".into())]);
    let invalid = Raw::object([("name", Raw::from("x")), ("age", 1.into()), ("email", "nope".into())]);
    let raw = Raw::object([("users", Raw::array([valid.clone(), valid, invalid]))]);

    let errors = team.construct(&raw).unwrap_err();
    assert_eq!(errors[0].path(), &path!["users", 2usize, "email"]);
    assert_eq!(errors[0].path().to_string(), "users[2].email");
}

#[test]
fn non_identifier_keys_are_bracketed() {
    let headers = schema! {
        "content-type" => StringValidator::new(StringOptions::new().min_length(1)).unwrap(),
    }
    .unwrap();

    let errors = headers.construct(&Raw::object([("content-type", "")])).unwrap_err();
    assert_eq!(errors.paths(), ["[content-type]"]);
}

#[test]
fn optional_fields_are_omitted_from_raw_projection() {
    let profile = schema! {
        "nickname" => OptionalValidator::new(StringValidator::new(StringOptions::new()).unwrap()),
        "bio" => OptionalValidator::with_none_values(
            StringValidator::new(StringOptions::new()).unwrap(),
            [Raw::Null, Raw::Undefined],
        )
        .unwrap(),
    }
    .unwrap();

    let value = profile.construct(&Raw::object([("bio", Raw::Null)])).unwrap();
    assert_eq!(value.to_raw(), Raw::object([("bio", Raw::Null)]));
}

#[test]
fn factory_rejects_duplicate_fields() {
    let text = StringValidator::new(StringOptions::new()).unwrap();
    let result = schema! { "a" => text.clone(), "a" => text };

    assert!(matches!(result, Err(ConfigError::DuplicateField { field }) if field == "a"));
}

#[test]
fn field_lookup_follows_schema() {
    let schema = user_schema(ObjectOptions::new());

    assert_eq!(schema.field_names().collect::<Vec<_>>(), ["name", "age", "email"]);
    assert!(schema.field("age").is_some());
    assert!(schema.field("admin").is_none());
}
