pub mod classify;
pub mod generate;

use crate::gemini::GeminiClient;

/// Per-request view of the server state handed to the handlers.
#[derive(Clone, Copy)]
pub struct RequestContext<'a> {
    pub gemini: &'a GeminiClient,
    pub classify_model: &'a str,
    pub promptgen_model: &'a str,
    pub max_output_tokens: u32,
}
