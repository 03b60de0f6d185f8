use std::time::Instant;

use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::constants::{PROMPTGEN_TEMPERATURE, PROMPTGEN_TOP_P};
use crate::error::RelayError;
use crate::gemini::GenerationOptions;
use crate::handlers::RequestContext;
use crate::payload::validate_generate_prompt_payload;
use crate::prompt::build_optimization_prompt;
use crate::streaming::{empty_prompt_response, relay_prompt_stream};

/// POST /generate-prompt
///
/// Body: `{"selectedContents": [string, ...]}`. Streams the optimized prompt
/// back as chunked `text/plain`. An empty selection yields an empty 200
/// body; malformed payloads get a 400; a provider failure before the stream
/// opens surfaces as a 5xx JSON error (there is no fail-open on this path).
pub async fn handle_generate_prompt(
    context: RequestContext<'_>,
    body: Value,
    cancellation_token: CancellationToken,
) -> Result<warp::reply::Response, RelayError> {
    let start_time = Instant::now();

    let selected_contents = validate_generate_prompt_payload(&body)
        .map_err(|e| RelayError::bad_request(e.message()))?;

    let prompt = build_optimization_prompt(&selected_contents);
    if prompt.is_empty() {
        log::info!("generate-prompt: nothing to do (empty selection)");
        return empty_prompt_response();
    }

    let options = GenerationOptions {
        temperature: PROMPTGEN_TEMPERATURE,
        top_p: PROMPTGEN_TOP_P,
        max_output_tokens: context.max_output_tokens,
    };

    let upstream = context
        .gemini
        .generate_stream(
            context.promptgen_model,
            &prompt,
            options,
            cancellation_token.clone(),
        )
        .await?;

    log::debug!(
        "generate-prompt: stream opened after {}",
        crate::logging::format_duration(start_time.elapsed())
    );

    relay_prompt_stream(upstream, cancellation_token)
}
