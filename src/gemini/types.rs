//! Wire types for the Gemini `generateContent` / `streamGenerateContent`
//! REST API. Only the fields this relay touches are modeled.

use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Serialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<TextPart>,
}

#[derive(Serialize)]
pub struct TextPart {
    pub text: String,
}

#[derive(Serialize)]
pub struct GenerationConfig {
    pub temperature: f64,
    #[serde(rename = "topP")]
    pub top_p: f64,
    #[serde(rename = "maxOutputTokens")]
    pub max_output_tokens: u32,
}

#[derive(Deserialize)]
pub struct GenerateContentResponse {
    pub candidates: Option<Vec<Candidate>>,
    pub error: Option<ApiError>,
}

#[derive(Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

#[derive(Deserialize)]
pub struct ApiError {
    pub message: String,
}

impl GenerateContentRequest {
    /// Single-turn user prompt, the only shape this relay ever sends.
    pub fn from_prompt(prompt: &str, generation_config: Option<GenerationConfig>) -> Self {
        Self {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![TextPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config,
        }
    }
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, if any text came back.
    pub fn first_candidate_text(&self) -> Option<String> {
        let candidates = self.candidates.as_ref()?;
        let candidate = candidates.first()?;
        let content = candidate.content.as_ref()?;

        let mut text = String::new();
        for part in &content.parts {
            if let Some(piece) = &part.text {
                text.push_str(piece);
            }
        }

        if text.is_empty() { None } else { Some(text) }
    }
}
