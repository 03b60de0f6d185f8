use std::sync::Arc;

use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;
use warp::Filter;

use crate::constants::MAX_JSON_BODY_SIZE_BYTES;
use crate::handlers::{RequestContext, classify, generate};
use crate::server::RelayServer;
use crate::server::json_response;

pub fn create_routes(
    server: Arc<RelayServer>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let with_server_state = warp::any().map(move || server.clone());

    let health_route = warp::path!("health")
        .and(warp::get())
        .map(|| json_response(&json!({"status": "ok"})));

    let classify_route = warp::path!("classify-nodes")
        .and(warp::post())
        .and(json_body())
        .and(with_server_state.clone())
        .and_then(|body: Value, s: Arc<RelayServer>| async move {
            let context = create_context(&s);
            let token = CancellationToken::new();
            classify::handle_classify_nodes(context, body, token)
                .await
                .map_err(warp::reject::custom)
        });

    let generate_route = warp::path!("generate-prompt")
        .and(warp::post())
        .and(json_body())
        .and(with_server_state.clone())
        .and_then(|body: Value, s: Arc<RelayServer>| async move {
            let context = create_context(&s);
            let token = CancellationToken::new();
            generate::handle_generate_prompt(context, body, token)
                .await
                .map_err(warp::reject::custom)
        });

    health_route.or(classify_route).or(generate_route)
}

fn create_context(s: &Arc<RelayServer>) -> RequestContext<'_> {
    RequestContext {
        gemini: &s.gemini,
        classify_model: &s.config.classify_model,
        promptgen_model: &s.config.promptgen_model,
        max_output_tokens: s.config.max_output_tokens,
    }
}

fn json_body() -> impl Filter<Extract = (Value,), Error = warp::Rejection> + Clone {
    warp::body::content_length_limit(MAX_JSON_BODY_SIZE_BYTES).and(warp::body::json())
}
