use std::time::Instant;

use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::constants::{ERROR_MISSING_NODES, ERROR_NODES_NOT_LIST, LOG_PREFIX_SUCCESS};
use crate::error::RelayError;
use crate::handlers::RequestContext;
use crate::logging::log_timed;
use crate::model::{ClassificationResult, Node};
use crate::parse::{fail_open, parse_classification_or_fail_open};
use crate::prompt::build_classification_prompt;
use crate::server::json_response;

/// POST /classify-nodes
///
/// Body: `{"nodes": [{"id": ..., "content": ...}, ...]}`. Returns a JSON
/// array of `{"id", "m"}` verdicts. Provider or parse trouble never fails
/// the request; the fail-open policy labels everything novel instead.
pub async fn handle_classify_nodes(
    context: RequestContext<'_>,
    body: Value,
    cancellation_token: CancellationToken,
) -> Result<warp::reply::Response, RelayError> {
    let start_time = Instant::now();

    let nodes_value = body
        .get("nodes")
        .ok_or_else(|| RelayError::bad_request(ERROR_MISSING_NODES))?;

    if !nodes_value.is_array() {
        return Err(RelayError::bad_request(ERROR_NODES_NOT_LIST));
    }

    let nodes: Vec<Node> = serde_json::from_value(nodes_value.clone())
        .map_err(|e| RelayError::bad_request(&format!("invalid node list: {}", e)))?;

    let results = classify_nodes(&context, &nodes, cancellation_token).await;

    log_timed(
        LOG_PREFIX_SUCCESS,
        &format!("classified {} nodes", nodes.len()),
        start_time,
    );
    Ok(json_response(&serde_json::to_value(&results).unwrap_or_else(|_| Value::Array(vec![]))))
}

/// End-to-end classification flow: prompt, model call, parse, fallback.
async fn classify_nodes(
    context: &RequestContext<'_>,
    nodes: &[Node],
    cancellation_token: CancellationToken,
) -> Vec<ClassificationResult> {
    let prompt = build_classification_prompt(nodes);

    let raw = match context
        .gemini
        .generate(context.classify_model, &prompt, cancellation_token)
        .await
    {
        Ok(text) => text,
        Err(e) => {
            log::warn!("classification fallback engaged: provider call failed: {}", e);
            return fail_open(nodes);
        }
    };

    parse_classification_or_fail_open(&raw, nodes)
}
