use value_rail::library::{BrazilianPhone, Email, EmailValue, Id, ShortString};
use value_rail::prelude::*;
use value_rail::schema;

fn signup_schema() -> Result<ObjectValidator, ConfigError> {
    let roles = SetValidator::new(["admin", "regular"], SetOptions::new().trim(true))?;
    let tags = ArrayValidator::new(ShortString::new(), ArrayOptions::new().max_length(5))?;

    schema! {
        ObjectOptions::new().unbounded_errors();
        "username" => Id::new(),
        "email" => Email::new(),
        "phone" => OptionalValidator::with_none_values(BrazilianPhone::new(), [Raw::Null, Raw::Undefined])?,
        "role" => roles,
        "tags" => OptionalValidator::new(tags),
    }
}

fn main() -> Result<(), ConfigError> {
    let signup = signup_schema()?;

    let good = Raw::object([
        ("username", Raw::from("  ada_lovelace ")),
        ("email", "ada@example.com".into()),
        ("phone", Raw::Null),
        ("role", " admin ".into()),
        ("tags", Raw::array(["math", "engines"])),
    ]);
    match signup.construct(&good) {
        Ok(user) => {
            let username = user.field::<StringValue>("username").map_or("", StringValue::as_str);
            let email = user.field::<EmailValue>("email").map_or("", EmailValue::as_str);
            println!("signed up {username} <{email}>");
            println!("normalised: {}", user.to_raw());
        },
        Err(errors) => println!("unexpected errors: {errors}"),
    }

    let bad = Raw::object([
        ("username", Raw::from("ada")),
        ("email", "ada-at-example.com".into()),
        ("phone", "12345".into()),
        ("role", "root".into()),
        ("tags", Raw::array([Raw::from("ok"), 42.into()])),
    ]);
    if let Err(errors) = signup.construct(&bad) {
        println!("signup rejected with {} errors:", errors.len());
        println!("{}", errors.fmt().pretty());
    }

    Ok(())
}
