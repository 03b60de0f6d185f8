use std::error::Error;
use std::fmt;

use warp::reject::Reject;

use crate::constants::ERROR_CANCELLED;

/// Error type for the relay server
#[derive(Debug, Clone)]
pub struct RelayError {
    pub message: String,
    pub status_code: u16,
    kind: RelayErrorKind,
}

#[derive(Debug, Clone)]
enum RelayErrorKind {
    RequestCancelled,
    InternalServerError,
    BadRequest,
    GeminiUnavailable,
    GeminiUpstream,
}

impl RelayError {
    pub fn internal_server_error(message: &str) -> Self {
        Self {
            message: message.to_string(),
            status_code: 500,
            kind: RelayErrorKind::InternalServerError,
        }
    }

    pub fn bad_request(message: &str) -> Self {
        Self {
            message: message.to_string(),
            status_code: 400,
            kind: RelayErrorKind::BadRequest,
        }
    }

    pub fn request_cancelled() -> Self {
        Self {
            message: ERROR_CANCELLED.to_string(),
            status_code: 499,
            kind: RelayErrorKind::RequestCancelled,
        }
    }

    pub fn gemini_unavailable(message: &str) -> Self {
        Self {
            message: message.to_string(),
            status_code: 503,
            kind: RelayErrorKind::GeminiUnavailable,
        }
    }

    /// Upstream returned a non-success status or an unusable body
    pub fn gemini_upstream(message: &str) -> Self {
        Self {
            message: message.to_string(),
            status_code: 502,
            kind: RelayErrorKind::GeminiUpstream,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self.kind, RelayErrorKind::RequestCancelled)
    }
}

impl fmt::Display for RelayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RelayError {}: {}", self.status_code, self.message)
    }
}

impl Error for RelayError {}

impl Reject for RelayError {}

#[macro_export]
macro_rules! check_cancelled {
    ($token:expr) => {
        if $token.is_cancelled() {
            return Err($crate::error::RelayError::request_cancelled());
        }
    };
}
