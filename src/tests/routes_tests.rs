use std::sync::Arc;

use clap::Parser;
use serde_json::{Value, json};
use warp::Filter;

use crate::config::Config;
use crate::server::routes::create_routes;
use crate::server::{RelayServer, handle_rejection};

fn test_routes() -> impl Filter<Extract = (impl warp::Reply,), Error = std::convert::Infallible> + Clone
{
    let config = Config::parse_from(["promptrelay"]);
    let server = RelayServer::new(config, "test-key".to_string()).expect("server should build");
    create_routes(Arc::new(server)).recover(handle_rejection)
}

#[tokio::test]
async fn health_endpoint_responds_ok() {
    let routes = test_routes();

    let response = warp::test::request()
        .method("GET")
        .path("/health")
        .reply(&routes)
        .await;

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn classify_rejects_non_list_nodes() {
    let routes = test_routes();

    let response = warp::test::request()
        .method("POST")
        .path("/classify-nodes")
        .json(&json!({"nodes": "not-a-list"}))
        .reply(&routes)
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(body["error"], "'nodes' must be a list");
}

#[tokio::test]
async fn classify_rejects_missing_nodes() {
    let routes = test_routes();

    let response = warp::test::request()
        .method("POST")
        .path("/classify-nodes")
        .json(&json!({}))
        .reply(&routes)
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(body["error"], "Missing 'nodes' in request body");
}

#[tokio::test]
async fn generate_prompt_rejects_missing_field() {
    let routes = test_routes();

    let response = warp::test::request()
        .method("POST")
        .path("/generate-prompt")
        .json(&json!({}))
        .reply(&routes)
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(body["error"], "Missing 'selectedContents' field.");
}

#[tokio::test]
async fn generate_prompt_rejects_wrong_element_type() {
    let routes = test_routes();

    let response = warp::test::request()
        .method("POST")
        .path("/generate-prompt")
        .json(&json!({"selectedContents": [1, 2]}))
        .reply(&routes)
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(
        body["error"],
        "All items in 'selectedContents' must be strings."
    );
}

#[tokio::test]
async fn generate_prompt_empty_selection_streams_nothing() {
    let routes = test_routes();

    let response = warp::test::request()
        .method("POST")
        .path("/generate-prompt")
        .json(&json!({"selectedContents": []}))
        .reply(&routes)
        .await;

    assert_eq!(response.status(), 200);
    assert!(response.body().is_empty());
}

#[tokio::test]
async fn generate_prompt_whitespace_only_selection_streams_nothing() {
    let routes = test_routes();

    let response = warp::test::request()
        .method("POST")
        .path("/generate-prompt")
        .json(&json!({"selectedContents": ["   ", "\n"]}))
        .reply(&routes)
        .await;

    assert_eq!(response.status(), 200);
    assert!(response.body().is_empty());
}

#[tokio::test]
async fn unknown_endpoint_is_404() {
    let routes = test_routes();

    let response = warp::test::request()
        .method("GET")
        .path("/nope")
        .reply(&routes)
        .await;

    assert_eq!(response.status(), 404);
}
