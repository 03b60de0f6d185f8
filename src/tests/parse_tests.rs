use crate::model::{ClassificationResult, Node};
use crate::parse::{
    ClassifyFailure, fail_open, parse_classification, parse_classification_or_fail_open,
};

fn nodes(ids: &[&str]) -> Vec<Node> {
    ids.iter()
        .map(|id| Node {
            id: id.to_string(),
            content: format!("content of {}", id),
        })
        .collect()
}

#[test]
fn parses_fenced_json_array() {
    let raw = "```json\n[{\"id\":\"a\",\"m\":1}]\n```";

    let results = parse_classification(raw, &nodes(&["a"])).unwrap();

    assert_eq!(
        results,
        vec![ClassificationResult {
            id: "a".to_string(),
            m: 1
        }]
    );
}

#[test]
fn parses_bare_json_array() {
    let raw = "[{\"id\":\"a\",\"m\":0},{\"id\":\"b\",\"m\":1}]";

    let results = parse_classification(raw, &nodes(&["a", "b"])).unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].m, 0);
    assert_eq!(results[1].m, 1);
}

#[test]
fn slices_off_chatter_around_the_array() {
    let raw = "Sure, here is the classification:\n[{\"id\":\"a\",\"m\":1}]\nHope that helps!";

    let results = parse_classification(raw, &nodes(&["a"])).unwrap();

    assert_eq!(results[0].id, "a");
}

#[test]
fn garbage_text_is_malformed() {
    let err = parse_classification("not json at all", &nodes(&["a"])).unwrap_err();
    assert!(matches!(err, ClassifyFailure::Malformed(_)));
}

#[test]
fn empty_text_is_no_text() {
    let err = parse_classification("", &nodes(&["a"])).unwrap_err();
    assert_eq!(err, ClassifyFailure::NoText);

    let err = parse_classification("```json\n```", &nodes(&["a"])).unwrap_err();
    assert_eq!(err, ClassifyFailure::NoText);
}

#[test]
fn out_of_range_label_is_malformed() {
    let raw = "[{\"id\":\"a\",\"m\":7}]";
    let err = parse_classification(raw, &nodes(&["a"])).unwrap_err();
    assert!(matches!(err, ClassifyFailure::Malformed(_)));
}

#[test]
fn unknown_id_is_a_mismatch() {
    let raw = "[{\"id\":\"ghost\",\"m\":1}]";
    let err = parse_classification(raw, &nodes(&["a"])).unwrap_err();
    assert_eq!(err, ClassifyFailure::IdMismatch);
}

#[test]
fn missing_id_is_a_mismatch() {
    let raw = "[{\"id\":\"a\",\"m\":1}]";
    let err = parse_classification(raw, &nodes(&["a", "b"])).unwrap_err();
    assert_eq!(err, ClassifyFailure::IdMismatch);
}

#[test]
fn fail_open_labels_everything_novel() {
    let input = nodes(&["a", "b", "c"]);

    let results = fail_open(&input);

    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|r| r.m == 1));
    assert_eq!(results[0].id, "a");
    assert_eq!(results[2].id, "c");
}

#[test]
fn fallback_wrapper_recovers_from_garbage() {
    let input = nodes(&["x", "y"]);

    let results = parse_classification_or_fail_open("not json at all", &input);

    assert_eq!(
        results,
        vec![
            ClassificationResult {
                id: "x".to_string(),
                m: 1
            },
            ClassificationResult {
                id: "y".to_string(),
                m: 1
            },
        ]
    );
}

#[test]
fn fallback_wrapper_passes_good_verdicts_through() {
    let input = nodes(&["x"]);

    let results = parse_classification_or_fail_open("[{\"id\":\"x\",\"m\":0}]", &input);

    assert_eq!(results[0].m, 0);
}
