//! Error types returned by [`PinnacleApiClient`](crate::PinnacleApiClient).

/// Failure of a single API call.
#[derive(Debug, thiserror::Error)]
pub enum PinnacleError {
    /// The HTTP request could not be performed or its body could not be read
    /// (connection, DNS, TLS, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body is not valid JSON or does not have the expected shape.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A specialized Result type for Pinnacle API operations.
pub type Result<T> = std::result::Result<T, PinnacleError>;

impl PinnacleError {
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}
