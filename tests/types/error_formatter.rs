use value_rail::raw::RawKind;
use value_rail::types::error_formatter::{ErrorFormatConfig, ErrorFormatter};
use value_rail::types::{ErrorKind, ValidationError, ValidationErrors};

fn sample() -> ValidationErrors {
    [
        ValidationError::raw_type(RawKind::String, RawKind::Number).with_prefix("name"),
        ValidationError::new(ErrorKind::TooShort { min: 6, actual: 2 }).with_prefix("id"),
    ]
    .into_iter()
    .collect()
}

#[test]
fn default_formatter_joins_with_semicolons() {
    let result = ErrorFormatConfig::default().format_errors(sample().iter());
    assert_eq!(
        result,
        "name: Wrong raw value type: expected string, got number; id: Too short: expected at least 6 but got 2"
    );
}

#[test]
fn pretty_formatter_draws_a_tree() {
    let result = ErrorFormatConfig::pretty().format_errors(sample().iter());
    assert_eq!(
        result,
        "┌ 2 error(s)\n├─ name: Wrong raw value type: expected string, got number\n└─ id: Too short: expected at least 6 but got 2"
    );
}

#[test]
fn compact_formatter_uses_pipes() {
    let result = sample().format_with(ErrorFormatConfig::compact());
    assert!(result.contains(" | id: "));
}

#[test]
fn no_path_formatter_omits_locations() {
    let result = sample().format_with(ErrorFormatConfig::no_path());
    assert!(result.starts_with("Wrong raw value type"));
    assert!(!result.contains("id:"));
}

#[test]
fn builder_shows_codes_and_custom_separator() {
    let errors = sample();
    let rendered = errors.fmt().with_separator("\n").show_code(true).show_path(false).to_string();

    assert_eq!(
        rendered,
        "Wrong raw value type: expected string, got number [raw_type_mismatch]\nToo short: expected at least 6 but got 2 [too_short]"
    );
}

#[test]
fn empty_list_formats_to_empty_string() {
    assert_eq!(ValidationErrors::new().to_string(), "");
}

struct CodesOnly;

impl ErrorFormatter for CodesOnly {
    fn format_item(&self, error: &ValidationError) -> String {
        format!("{}@{}", error.code(), error.path())
    }

    fn separator(&self) -> &str {
        ","
    }
}

#[test]
fn custom_formatter_is_used_by_format_with() {
    assert_eq!(sample().format_with(CodesOnly), "raw_type_mismatch@name,too_short@id");
}
