use serde_json::json;
use value_rail::library::{Email, Percentage};
use value_rail::prelude::*;
use value_rail::schema;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let line = schema! {
        "sku" => StringValidator::new(StringOptions::new().trim(true).pattern("^[A-Z]{3}-[0-9]{4}$"))?,
        "quantity" => IntegerValidator::new(IntegerOptions::new().min(1).max(99))?,
        "discount" => OptionalValidator::new(Percentage::new()),
    }?;
    let order = schema! {
        ObjectOptions::new().max_errors(10);
        "customer" => Email::new(),
        "lines" => ArrayValidator::new(line, ArrayOptions::new().min_length(1).max_errors(10))?,
    }?;

    let body = json!({
        "customer": "buyer@example.com",
        "lines": [
            { "sku": "ABC-0001", "quantity": 2, "discount": 12.345 },
            { "sku": "abc-2", "quantity": 0 },
            { "sku": "XYZ-9999", "quantity": 1.5 }
        ]
    });

    match order.construct(&Raw::from(&body)) {
        Ok(order) => println!("{}", serde_json::Value::try_from(order.to_raw())?),
        Err(errors) => {
            println!("{}", serde_json::to_string_pretty(&errors)?);
            println!("{}", errors.fmt().with_separator("\n"));
        },
    }

    let fixed = json!({
        "customer": " buyer@example.com ",
        "lines": [{ "sku": "ABC-0001", "quantity": 2, "discount": 12.345 }]
    });
    let order = order.construct(&Raw::from(fixed))?;
    println!("{}", serde_json::Value::try_from(order.to_raw())?);

    Ok(())
}
