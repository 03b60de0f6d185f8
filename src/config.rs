use clap::Parser;

use crate::constants::{
    DEFAULT_CLASSIFY_MODEL, DEFAULT_MAX_OUTPUT_TOKENS, DEFAULT_PROMPTGEN_MODEL,
};

#[derive(Parser, Debug, Clone)]
#[command(name = "promptrelay")]
#[command(about = "backend relay between the mindmap front-end and the Gemini API")]
pub struct Config {
    #[arg(long, default_value = "127.0.0.1:5000", help = "server listen address")]
    pub listen: String,

    #[arg(
        long,
        default_value = "https://generativelanguage.googleapis.com/v1beta",
        help = "Gemini API base url"
    )]
    pub gemini_url: String,

    #[arg(
        long,
        default_value = DEFAULT_CLASSIFY_MODEL,
        help = "model id used for node classification"
    )]
    pub classify_model: String,

    #[arg(
        long,
        default_value = DEFAULT_PROMPTGEN_MODEL,
        help = "model id used for streamed prompt generation"
    )]
    pub promptgen_model: String,

    #[arg(
        long,
        default_value_t = DEFAULT_MAX_OUTPUT_TOKENS,
        help = "maximum output tokens for prompt generation"
    )]
    pub max_output_tokens: u32,

    #[arg(
        long,
        default_value = "info",
        help = "log level (off, error, warn, info, debug, trace)"
    )]
    pub log_level: String,
}

pub fn validate_config(config: &Config) -> Result<(), String> {
    if config.listen.parse::<std::net::SocketAddr>().is_err() {
        return Err(format!("invalid listen address: {}", config.listen));
    }
    if !config.gemini_url.starts_with("http://") && !config.gemini_url.starts_with("https://") {
        return Err(format!(
            "invalid Gemini URL (must start with http:// or https://): {}",
            config.gemini_url
        ));
    }
    if let Err(e) = url::Url::parse(&config.gemini_url) {
        return Err(format!("invalid Gemini URL format: {}", e));
    }
    if config.max_output_tokens == 0 {
        return Err("max-output-tokens must be greater than zero".to_string());
    }
    Ok(())
}

/// Reads the provider API key once at startup. Kept out of `Config` so the
/// secret never appears in clap's help or debug output.
pub fn load_api_key() -> Result<String, String> {
    match std::env::var("GEMINI_API_KEY") {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err("GEMINI_API_KEY is not set".to_string()),
    }
}
