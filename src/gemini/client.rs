use tokio_util::sync::CancellationToken;

use crate::check_cancelled;
use crate::constants::{
    CONTENT_TYPE_JSON, ERROR_GEMINI_UNAVAILABLE, GEMINI_GENERATE_ACTION, GEMINI_STREAM_ACTION,
};
use crate::error::RelayError;
use crate::gemini::types::{GenerateContentRequest, GenerateContentResponse, GenerationConfig};

/// Sampling parameters for a generation call. `None` means provider defaults.
#[derive(Debug, Clone, Copy)]
pub struct GenerationOptions {
    pub temperature: f64,
    pub top_p: f64,
    pub max_output_tokens: u32,
}

impl From<GenerationOptions> for GenerationConfig {
    fn from(options: GenerationOptions) -> Self {
        GenerationConfig {
            temperature: options.temperature,
            top_p: options.top_p,
            max_output_tokens: options.max_output_tokens,
        }
    }
}

/// Explicitly constructed Gemini API client. Owns no global state; the API
/// key is injected once at startup and never read from the environment here.
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(http: reqwest::Client, base_url: String, api_key: String) -> Self {
        Self {
            http,
            base_url,
            api_key,
        }
    }

    fn action_url(&self, model: &str, action: &str, sse: bool) -> String {
        let alt = if sse { "alt=sse&" } else { "" };
        format!(
            "{}/models/{}:{}?{}key={}",
            self.base_url, model, action, alt, self.api_key
        )
    }

    /// Non-streaming generation. Returns the concatenated text of the first
    /// candidate; a response with no text at all is an upstream error so the
    /// caller can distinguish it from a parse failure.
    pub async fn generate(
        &self,
        model: &str,
        prompt: &str,
        token: CancellationToken,
    ) -> Result<String, RelayError> {
        let request = GenerateContentRequest::from_prompt(prompt, None);
        let url = self.action_url(model, GEMINI_GENERATE_ACTION, false);

        let response = self.post_cancellable(&url, &request, token.clone()).await?;
        let status = response.status();

        let body: GenerateContentResponse = tokio::select! {
            result = response.json::<GenerateContentResponse>() => result.map_err(|e| {
                RelayError::gemini_upstream(&format!("invalid JSON from Gemini: {}", e))
            })?,
            _ = token.cancelled() => return Err(RelayError::request_cancelled()),
        };

        if let Some(error) = &body.error {
            return Err(RelayError::gemini_upstream(&format!(
                "Gemini error: {}",
                error.message
            )));
        }
        if !status.is_success() {
            return Err(RelayError::gemini_upstream(&format!(
                "Gemini error: {}",
                status
            )));
        }

        body.first_candidate_text()
            .ok_or_else(|| RelayError::gemini_upstream("Gemini response carried no text"))
    }

    /// Streaming generation over SSE. Hands back the raw response so the
    /// relay layer can forward fragments as they arrive.
    pub async fn generate_stream(
        &self,
        model: &str,
        prompt: &str,
        options: GenerationOptions,
        token: CancellationToken,
    ) -> Result<reqwest::Response, RelayError> {
        let request = GenerateContentRequest::from_prompt(prompt, Some(options.into()));
        let url = self.action_url(model, GEMINI_STREAM_ACTION, true);

        let response = self.post_cancellable(&url, &request, token).await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!(
                "Gemini stream request rejected: {} {}",
                status,
                crate::logging::sanitize_log_message(&body)
            );
            return Err(RelayError::gemini_upstream(&format!(
                "Gemini error: {}",
                status
            )));
        }

        Ok(response)
    }

    async fn post_cancellable(
        &self,
        url: &str,
        body: &GenerateContentRequest,
        token: CancellationToken,
    ) -> Result<reqwest::Response, RelayError> {
        check_cancelled!(token);

        let request_builder = self
            .http
            .post(url)
            .header("Content-Type", CONTENT_TYPE_JSON)
            .json(body);

        tokio::select! {
            result = request_builder.send() => {
                match result {
                    Ok(response) => Ok(response),
                    Err(err) => {
                        let error_msg = if err.is_connect() {
                            ERROR_GEMINI_UNAVAILABLE
                        } else if err.is_request() {
                            "invalid request"
                        } else {
                            "request failed"
                        };
                        // the request URL carries the API key in its query
                        // string, so it must never reach the logs
                        log::error!(
                            "Gemini request failed: {}: {:?}",
                            error_msg,
                            err.without_url()
                        );
                        Err(RelayError::gemini_unavailable(error_msg))
                    }
                }
            }
            _ = token.cancelled() => {
                Err(RelayError::request_cancelled())
            }
        }
    }
}
