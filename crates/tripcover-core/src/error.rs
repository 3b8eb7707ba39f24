//! Error types shared across the service

pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the chat pipeline and its collaborators
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("authentication error: {0}")]
    Authentication(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("vector store error: {0}")]
    VectorStore(String),

    #[error("embedding provider error: {0}")]
    EmbeddingProvider(String),

    #[error("completion provider returned status {status}: {message}")]
    Provider { status: u16, message: String },

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("request timed out: {0}")]
    Timeout(String),
}

impl Error {
    /// HTTP status to surface for this failure.
    ///
    /// Upstream statuses are passed through when the provider reported one;
    /// malformed input is the caller's fault; everything else is a 500.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::InvalidRequest(_) => 400,
            Error::Provider { status, .. } if (400..=599).contains(status) => *status,
            _ => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_request_maps_to_400() {
        let err = Error::InvalidRequest("messages must not be empty".to_string());
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn provider_status_is_passed_through() {
        let err = Error::Provider {
            status: 429,
            message: "rate limited".to_string(),
        };
        assert_eq!(err.status_code(), 429);
    }

    #[test]
    fn provider_status_outside_http_range_falls_back_to_500() {
        let err = Error::Provider {
            status: 0,
            message: "connection reset".to_string(),
        };
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn infrastructure_failures_map_to_500() {
        assert_eq!(Error::VectorStore("unreachable".to_string()).status_code(), 500);
        assert_eq!(Error::Network("dns".to_string()).status_code(), 500);
        assert_eq!(Error::Timeout("deadline".to_string()).status_code(), 500);
    }
}
