use value_rail::prelude::*;

fn main() {
    let quantity = IntegerValidator::new(IntegerOptions::new().min(1).max(99)).expect("valid options");
    let input = [Raw::from(3), Raw::from(0), Raw::from("12"), Raw::from(4.5), Raw::from(7)];

    let combined: Validation<ValidationError, Vec<IntegerValue>> =
        input.iter().map(|raw| quantity.validate(raw)).collect();

    match combined {
        Validation::Valid(values) => println!("valid quantities: {values:?}"),
        Validation::Invalid(errors) => {
            for err in errors {
                println!("validation error [{}]: {err}", err.code());
            }
        },
    }
}
