//! Failure taxonomy for catalog lookups.

use reqwest::StatusCode;

/// Coarse failure class, as seen by a caller that only wants to branch on
/// where a lookup went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network failure or an unreadable body.
    Transport,
    /// Non-2xx status.
    Http,
    /// Well-formed body carrying an `Error` field.
    Api,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Transport => "transport",
            ErrorKind::Http => "http",
            ErrorKind::Api => "api",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("could not decode response: {0}")]
    Decode(String),

    #[error("request failed with HTTP status {0}")]
    Http(StatusCode),

    #[error("{0}")]
    Api(String),
}

impl SearchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SearchError::Transport(_) | SearchError::Decode(_) => ErrorKind::Transport,
            SearchError::Http(_) => ErrorKind::Http,
            SearchError::Api(_) => ErrorKind::Api,
        }
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            SearchError::Decode(e.to_string())
        } else {
            SearchError::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(e: serde_json::Error) -> Self {
        SearchError::Decode(e.to_string())
    }
}
