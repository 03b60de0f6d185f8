/// Gemini REST API action suffixes (appended after the model id)
pub const GEMINI_GENERATE_ACTION: &str = "generateContent";
pub const GEMINI_STREAM_ACTION: &str = "streamGenerateContent";

/// Default model ids: classification wants the stronger model, prompt
/// rewriting gets by with the cheaper one
pub const DEFAULT_CLASSIFY_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_PROMPTGEN_MODEL: &str = "gemini-2.5-flash-lite";

/// Fixed generation parameters for the prompt-generation stream
pub const PROMPTGEN_TEMPERATURE: f64 = 0.3;
pub const PROMPTGEN_TOP_P: f64 = 0.9;
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 200;

/// Instruction wrapped around the joined snippets on the prompt-generation path
pub const OPTIMIZATION_INSTRUCTION: &str = "Rewrite the user's instructions into one concise, optimized prompt sentence not question.\nDo not answer the questions, explain, or add greetings. Output only the final prompt. User text:\n";

/// Instruction for the node-classification path
pub const CLASSIFICATION_INSTRUCTION: &str = "You are given a list of items extracted from a conversation. Ignore answer-type messages. Classify only the question-like items.\n\nLabel each item as:\n  - 1 \u{2192} a new, distinct question idea\n  - 0 \u{2192} a repeated, rephrased, or closely related question in the same cluster\n\nReturn ONLY a valid JSON array with no explanation, no comments, no text before or after.\nFormat: [{\"id\": \"x\", \"m\": 1}]\nClassify every item in the list.\n";

/// Response headers
pub const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";
pub const CONTENT_TYPE_TEXT: &str = "text/plain; charset=utf-8";
pub const HEADER_CACHE_CONTROL: &str = "no-cache";
pub const HEADER_CONNECTION: &str = "keep-alive";
pub const HEADER_ACCESS_CONTROL_ALLOW_ORIGIN: &str = "*";
pub const HEADER_ACCESS_CONTROL_ALLOW_METHODS: &str = "GET, POST, OPTIONS";
pub const HEADER_ACCESS_CONTROL_ALLOW_HEADERS: &str = "Content-Type, Authorization";

/// Error messages
pub const ERROR_MISSING_NODES: &str = "Missing 'nodes' in request body";
pub const ERROR_NODES_NOT_LIST: &str = "'nodes' must be a list";
pub const ERROR_CANCELLED: &str = "Request cancelled by client";
pub const ERROR_GEMINI_UNAVAILABLE: &str = "Gemini API not reachable";

/// SSE parsing constants (Gemini streams with `alt=sse`)
pub const SSE_DATA_PREFIX: &str = "data: ";
pub const SSE_MESSAGE_BOUNDARY: &str = "\n\n";

/// Markdown fence markers stripped from classification responses
pub const FENCE_JSON: &str = "```json";
pub const FENCE_PLAIN: &str = "```";

/// Maximum accepted JSON body size (bytes)
pub const MAX_JSON_BODY_SIZE_BYTES: u64 = 1024 * 1024;

/// Logging prefixes
pub const LOG_PREFIX_SUCCESS: &str = "✅";
pub const LOG_PREFIX_ERROR: &str = "❌";
pub const LOG_PREFIX_CONN: &str = "↔️";
