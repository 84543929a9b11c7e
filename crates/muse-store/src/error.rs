//! Storage errors

/// Failure of a local or remote store operation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The keyed record does not exist
    #[error("not found: {0}")]
    NotFound(String),

    /// Local filesystem failure
    #[error("io error: {0}")]
    Io(String),

    /// Record could not be (de)serialized
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Remote network failure
    #[error("network error: {0}")]
    Network(String),

    /// Remote call timed out
    #[error("store call timed out after {secs}s")]
    Timeout { secs: u64 },

    /// Remote service transiently unavailable
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Whether the remote retry wrapper may attempt the call again
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::Timeout { .. } | Self::Unavailable(_)
        )
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
