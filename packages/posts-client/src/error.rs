//! Error types for the posts client.

use thiserror::Error;

/// Result type for posts client operations.
pub type Result<T> = std::result::Result<T, PostsError>;

/// Posts client errors.
///
/// Every variant is a network-level failure from the point of view of a
/// caller: the request either never completed or the remote store refused it.
#[derive(Debug, Error)]
pub enum PostsError {
    /// Transport failure (connection refused, timeout, body read)
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response from the remote store
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Success status but the body was not the expected JSON
    #[error("Parse error: {0}")]
    Parse(String),
}

impl PostsError {
    /// True when the request never produced an HTTP response.
    pub fn is_transport(&self) -> bool {
        matches!(self, PostsError::Network(_))
    }

    /// HTTP status of a rejected request, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            PostsError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for PostsError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            PostsError::Parse(err.to_string())
        } else {
            PostsError::Network(err.to_string())
        }
    }
}
