use std::fmt;

use async_trait::async_trait;

use super::types::{RecommendRequest, Recommendation};

/// Errors that can occur while fetching recommendations.
/// None of them are retried; the user resubmits manually.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The endpoint answered with a non-2xx status.
    Api { status: u16, message: String },
    /// A 2xx response whose body is not a recommendation list.
    Parse(String),
}

impl RequestError {
    /// The underlying message, as received from the transport or the server.
    pub fn message(&self) -> &str {
        match self {
            RequestError::Network(msg) | RequestError::Parse(msg) => msg,
            RequestError::Api { message, .. } => message,
        }
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::Network(msg) => write!(f, "network error: {msg}"),
            RequestError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            RequestError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for RequestError {}

/// Anything that can turn a normalized payload into recommendations.
#[async_trait]
pub trait RecommendationSource: Send + Sync {
    /// Returns the name of the source, for logging.
    fn name(&self) -> &str;

    /// Issues a single request for the given payload.
    async fn recommend(
        &self,
        request: &RecommendRequest,
    ) -> Result<Vec<Recommendation>, RequestError>;
}
