use serde::{Deserialize, Serialize};

/// One conversation item sent by the front-end for classification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Node {
    pub id: String,
    pub content: String,
}

/// Classification verdict for a single node. `m == 1` marks a new question
/// idea, `m == 0` a duplicate of an existing cluster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassificationResult {
    pub id: String,
    pub m: u8,
}
