use std::collections::HashSet;
use std::fmt;

use crate::constants::{FENCE_JSON, FENCE_PLAIN};
use crate::model::{ClassificationResult, Node};

/// Why a classification response could not be used verbatim. Every variant
/// resolves to the same fail-open fallback; the distinction exists for logs
/// and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifyFailure {
    /// The provider call itself failed
    Provider(String),
    /// The provider answered but the response carried no text
    NoText,
    /// Text was present but not parseable as the expected JSON array
    Malformed(String),
    /// Parsed fine but the returned ids do not cover the input id set
    IdMismatch,
}

impl fmt::Display for ClassifyFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassifyFailure::Provider(msg) => write!(f, "provider call failed: {}", msg),
            ClassifyFailure::NoText => write!(f, "response carried no text"),
            ClassifyFailure::Malformed(msg) => write!(f, "malformed response: {}", msg),
            ClassifyFailure::IdMismatch => write!(f, "returned ids do not match input ids"),
        }
    }
}

/// Fail-open policy: when the model's verdict is unusable, label everything
/// a new idea. Losing a duplicate marker is recoverable; silently dropping a
/// candidate idea is not.
pub fn fail_open(nodes: &[Node]) -> Vec<ClassificationResult> {
    nodes
        .iter()
        .map(|n| ClassificationResult {
            id: n.id.clone(),
            m: 1,
        })
        .collect()
}

/// Extracts the model's JSON array verdict from raw response text.
///
/// The model is told to return bare JSON but routinely wraps it in Markdown
/// fences or chatter, so the fences are stripped and the text sliced down to
/// the outermost `[` .. `]` before parsing.
pub fn parse_classification(
    raw: &str,
    nodes: &[Node],
) -> Result<Vec<ClassificationResult>, ClassifyFailure> {
    let cleaned = raw
        .replace(FENCE_JSON, "")
        .replace(FENCE_PLAIN, "")
        .trim()
        .to_string();

    if cleaned.is_empty() {
        return Err(ClassifyFailure::NoText);
    }

    let mut sliced: &str = &cleaned;
    if let Some(start) = sliced.find('[')
        && start > 0
    {
        sliced = &sliced[start..];
    }
    if let Some(end) = sliced.rfind(']') {
        sliced = &sliced[..=end];
    }

    let results: Vec<ClassificationResult> =
        serde_json::from_str(sliced).map_err(|e| ClassifyFailure::Malformed(e.to_string()))?;

    if results.iter().any(|r| r.m > 1) {
        return Err(ClassifyFailure::Malformed(
            "label out of range (expected 0 or 1)".to_string(),
        ));
    }

    verify_id_coverage(&results, nodes)?;

    Ok(results)
}

/// Convenience wrapper applying the fail-open policy on any failure.
pub fn parse_classification_or_fail_open(raw: &str, nodes: &[Node]) -> Vec<ClassificationResult> {
    match parse_classification(raw, nodes) {
        Ok(results) => results,
        Err(failure) => {
            log::warn!("classification fallback engaged: {}", failure);
            fail_open(nodes)
        }
    }
}

/// The returned id set must equal the input id set: no unknown ids, no
/// missing ids. Order is not significant.
fn verify_id_coverage(
    results: &[ClassificationResult],
    nodes: &[Node],
) -> Result<(), ClassifyFailure> {
    let expected: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
    let returned: HashSet<&str> = results.iter().map(|r| r.id.as_str()).collect();

    if expected == returned {
        Ok(())
    } else {
        Err(ClassifyFailure::IdMismatch)
    }
}
