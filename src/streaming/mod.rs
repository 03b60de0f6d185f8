pub mod response;
pub mod sse;

pub use response::create_text_stream_response;
pub use sse::{empty_prompt_response, relay_prompt_stream};
