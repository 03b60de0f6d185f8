use crate::constants::{CLASSIFICATION_INSTRUCTION, OPTIMIZATION_INSTRUCTION};
use crate::model::Node;

/// Builds the prompt that asks the model to rewrite the selected snippets
/// into one optimized prompt sentence.
///
/// Snippets are trimmed and blanks dropped; if nothing remains the result is
/// the empty string, which the streaming path treats as "nothing to do"
/// rather than an error.
pub fn build_optimization_prompt(snippets: &[String]) -> String {
    let kept: Vec<&str> = snippets
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

    if kept.is_empty() {
        return String::new();
    }

    format!("{}{}", OPTIMIZATION_INSTRUCTION, kept.join("\n"))
}

/// Builds the classification prompt: fixed instruction plus the node list
/// serialized as JSON so the model sees ids verbatim.
pub fn build_classification_prompt(nodes: &[Node]) -> String {
    let items_json = serde_json::to_string(nodes).unwrap_or_else(|_| "[]".to_string());
    format!("{}\nItems:\n{}", CLASSIFICATION_INSTRUCTION, items_json)
}
