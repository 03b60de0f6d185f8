use crate::constants::OPTIMIZATION_INSTRUCTION;
use crate::model::Node;
use crate::prompt::{build_classification_prompt, build_optimization_prompt};

#[test]
fn wraps_snippets_with_instruction_and_newlines() {
    let snippets = vec![
        "  how does async work?  ".to_string(),
        "explain lifetimes".to_string(),
    ];

    let prompt = build_optimization_prompt(&snippets);

    assert!(prompt.starts_with(OPTIMIZATION_INSTRUCTION));
    assert!(prompt.ends_with("how does async work?\nexplain lifetimes"));
}

#[test]
fn preserves_snippet_order() {
    let snippets = vec!["b".to_string(), "a".to_string(), "c".to_string()];

    let prompt = build_optimization_prompt(&snippets);
    let joined = prompt.strip_prefix(OPTIMIZATION_INSTRUCTION).unwrap();

    assert_eq!(joined, "b\na\nc");
}

#[test]
fn empty_selection_yields_empty_prompt() {
    assert_eq!(build_optimization_prompt(&[]), "");
}

#[test]
fn whitespace_only_snippets_yield_empty_prompt() {
    let snippets = vec!["   ".to_string(), "\t\n".to_string()];
    assert_eq!(build_optimization_prompt(&snippets), "");
}

#[test]
fn drops_blank_snippets_but_keeps_the_rest() {
    let snippets = vec!["  ".to_string(), "keep me".to_string()];

    let prompt = build_optimization_prompt(&snippets);

    assert!(prompt.ends_with("keep me"));
    assert!(!prompt.contains("\n\n"));
}

#[test]
fn classification_prompt_embeds_node_json() {
    let nodes = vec![
        Node {
            id: "n1".to_string(),
            content: "what is ownership?".to_string(),
        },
        Node {
            id: "n2".to_string(),
            content: "who owns what?".to_string(),
        },
    ];

    let prompt = build_classification_prompt(&nodes);

    assert!(prompt.contains("\nItems:\n"));
    assert!(prompt.contains("\"id\":\"n1\""));
    assert!(prompt.contains("\"content\":\"who owns what?\""));
}

#[test]
fn classification_prompt_is_deterministic() {
    let nodes = vec![Node {
        id: "x".to_string(),
        content: "y".to_string(),
    }];

    assert_eq!(
        build_classification_prompt(&nodes),
        build_classification_prompt(&nodes)
    );
}
