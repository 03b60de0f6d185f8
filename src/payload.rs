use std::fmt;

use serde_json::Value;

/// Why a prompt-generation payload was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadError {
    /// Body decoded to something other than a JSON object
    InvalidPayload,
    /// Object is missing the `selectedContents` key
    MissingField,
    /// `selectedContents` is not an array
    NotAList,
    /// An element of `selectedContents` is not a string
    NonStringElement,
}

impl PayloadError {
    pub fn message(&self) -> &'static str {
        match self {
            PayloadError::InvalidPayload => "Request body must be a JSON object.",
            PayloadError::MissingField => "Missing 'selectedContents' field.",
            PayloadError::NotAList => "'selectedContents' must be a list.",
            PayloadError::NonStringElement => "All items in 'selectedContents' must be strings.",
        }
    }
}

impl fmt::Display for PayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for PayloadError {}

/// Checks the shape of a `/generate-prompt` body and hands back the selected
/// contents untouched. No trimming or dedup happens here.
pub fn validate_generate_prompt_payload(data: &Value) -> Result<Vec<String>, PayloadError> {
    let object = data.as_object().ok_or(PayloadError::InvalidPayload)?;

    let selected = object
        .get("selectedContents")
        .ok_or(PayloadError::MissingField)?;

    let items = selected.as_array().ok_or(PayloadError::NotAList)?;

    let mut contents = Vec::with_capacity(items.len());
    for item in items {
        let text = item.as_str().ok_or(PayloadError::NonStringElement)?;
        contents.push(text.to_string());
    }

    Ok(contents)
}
