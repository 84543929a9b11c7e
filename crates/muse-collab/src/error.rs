//! Collaborator error taxonomy
//!
//! Errors split into retryable (network, timeout, rate-limit, transient
//! unavailability) and non-retryable (configuration, validation). The retry
//! wrapper consults [`CollabError::is_retryable`]; non-retryable errors
//! abort immediately without consuming retry budget.

/// Typed failure of a collaborator call
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollabError {
    /// Missing or invalid API credentials; fatal, surfaced at startup
    #[error("collaborator configuration error: {0}")]
    Configuration(String),

    /// Malformed input or malformed collaborator output
    #[error("validation error: {0}")]
    Validation(String),

    /// Network-level failure
    #[error("network error: {0}")]
    Network(String),

    /// Per-call timeout elapsed; any partial result is discarded
    #[error("collaborator call timed out after {secs}s")]
    Timeout { secs: u64 },

    /// Rate limited by the backend
    #[error("rate limited by collaborator")]
    RateLimit { retry_after_secs: Option<u64> },

    /// Transient service unavailability
    #[error("collaborator unavailable: {0}")]
    Unavailable(String),
}

impl CollabError {
    /// Whether the retry wrapper may attempt this call again
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::Timeout { .. } | Self::RateLimit { .. } | Self::Unavailable(_)
        )
    }
}
