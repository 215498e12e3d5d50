use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of dashboard fetch failures.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// The request never produced a response (connection refused, DNS, CORS).
    Network,
    /// The server answered with a non-2xx status.
    Status,
    /// The body did not match the expected read model.
    Decode,
}

impl fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchErrorKind::Network => write!(f, "Network"),
            FetchErrorKind::Status => write!(f, "Status"),
            FetchErrorKind::Decode => write!(f, "Decode"),
        }
    }
}

/// Error body returned by the hospital API, e.g. `{"error": "Doctor not found"}`.
#[derive(Debug, Clone, Deserialize)]
struct ApiErrorBody {
    error: String,
}

/// A failed dashboard read.
///
/// Views store this as their failed state, so it is `Clone + PartialEq` and
/// holds only owned strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FetchError {
    pub kind: FetchErrorKind,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    pub message: String,
}

impl FetchError {
    pub fn network(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::Network,
            url: url.into(),
            status: None,
            message: message.into(),
        }
    }

    /// Build a status error, preferring the API's `{"error": ...}` message
    /// over the raw body when the body carries one.
    pub fn status(url: impl Into<String>, status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .map(|b| b.error)
            .unwrap_or_else(|_| {
                let trimmed = body.trim();
                if trimmed.is_empty() {
                    format!("HTTP {status}")
                } else {
                    trimmed.to_string()
                }
            });
        Self {
            kind: FetchErrorKind::Status,
            url: url.into(),
            status: Some(status),
            message,
        }
    }

    pub fn decode(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::Decode,
            url: url.into(),
            status: None,
            message: message.into(),
        }
    }

    /// Short message suitable for the error notice shown in a view.
    pub fn friendly_message(&self) -> String {
        match (self.kind, self.status) {
            (FetchErrorKind::Network, _) => {
                "Could not reach the hospital API. Is the server running?".to_string()
            }
            (FetchErrorKind::Status, Some(404)) => format!("Not found: {}", self.message),
            (FetchErrorKind::Status, _) => format!("The server rejected the request: {}", self.message),
            (FetchErrorKind::Decode, _) => {
                "The server returned data in an unexpected format.".to_string()
            }
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(code) => write!(f, "{} ({code}) {}: {}", self.kind, self.url, self.message),
            None => write!(f, "{} {}: {}", self.kind, self.url, self.message),
        }
    }
}

impl std::error::Error for FetchError {}
