use serde_json::json;

use crate::payload::{PayloadError, validate_generate_prompt_payload};

#[test]
fn rejects_non_object_body() {
    let result = validate_generate_prompt_payload(&json!("just a string"));
    assert_eq!(result.unwrap_err(), PayloadError::InvalidPayload);

    let result = validate_generate_prompt_payload(&json!([1, 2, 3]));
    assert_eq!(result.unwrap_err(), PayloadError::InvalidPayload);
}

#[test]
fn rejects_missing_field() {
    let result = validate_generate_prompt_payload(&json!({}));
    assert_eq!(result.unwrap_err(), PayloadError::MissingField);
}

#[test]
fn rejects_non_list_value() {
    let result = validate_generate_prompt_payload(&json!({"selectedContents": "x"}));
    assert_eq!(result.unwrap_err(), PayloadError::NotAList);
}

#[test]
fn rejects_non_string_elements() {
    let result = validate_generate_prompt_payload(&json!({"selectedContents": [1, 2]}));
    assert_eq!(result.unwrap_err(), PayloadError::NonStringElement);

    let result = validate_generate_prompt_payload(&json!({"selectedContents": ["ok", null]}));
    assert_eq!(result.unwrap_err(), PayloadError::NonStringElement);
}

#[test]
fn accepts_string_list_unchanged() {
    let result = validate_generate_prompt_payload(&json!({"selectedContents": ["a", "b"]}));
    assert_eq!(result.unwrap(), vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn accepts_empty_list() {
    let result = validate_generate_prompt_payload(&json!({"selectedContents": []}));
    assert!(result.unwrap().is_empty());
}

#[test]
fn does_not_trim_at_validation_stage() {
    let result = validate_generate_prompt_payload(&json!({"selectedContents": ["  padded  "]}));
    assert_eq!(result.unwrap(), vec!["  padded  ".to_string()]);
}

#[test]
fn error_messages_are_human_readable() {
    assert_eq!(
        PayloadError::MissingField.message(),
        "Missing 'selectedContents' field."
    );
    assert_eq!(
        PayloadError::NotAList.message(),
        "'selectedContents' must be a list."
    );
}
