use std::fmt;

use reqwest::StatusCode;

/// Why a page request failed.
///
/// The pagination controller treats every variant the same way; the split
/// only exists so callers can print a useful message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Transport failure or an unexpected HTTP status.
    Network(String),
    /// The credential was rejected (401/403).
    Auth(String),
    /// The body did not have the shape of a page.
    MalformedResponse(String),
}

impl FetchError {
    /// Classifies a non-success HTTP status.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let message = format!("{}: {}", status, body.trim());
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => FetchError::Auth(message),
            _ => FetchError::Network(message),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {}", msg),
            FetchError::Auth(msg) => write!(f, "authorization rejected: {}", msg),
            FetchError::MalformedResponse(msg) => write!(f, "malformed response: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return FetchError::MalformedResponse(err.to_string());
        }
        match err.status() {
            Some(StatusCode::UNAUTHORIZED) | Some(StatusCode::FORBIDDEN) => {
                FetchError::Auth(err.to_string())
            }
            _ => FetchError::Network(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::MalformedResponse(err.to_string())
    }
}
