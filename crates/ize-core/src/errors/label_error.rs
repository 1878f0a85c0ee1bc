//! Label generation errors.

use super::error_code::{self, IzeErrorCode};

/// Errors reported by a label generator for a single cluster.
///
/// None of these abort a batch: the caller keeps the cluster's existing
/// display name.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LabelError {
    #[error("label provider {provider} unavailable")]
    Unavailable { provider: String },

    #[error("label request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("transient label failure (status {status:?}): {message}")]
    Transient { status: Option<u16>, message: String },

    #[error("label request rejected (status {status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("label provider returned an empty label")]
    EmptyLabel,
}

impl LabelError {
    /// Whether retrying the same request may succeed.
    ///
    /// Mirrors HTTP semantics: 429, 500, 502, 503 and 529 are transient,
    /// other statuses are not. Timeouts and status-less failures retry.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout { .. } => true,
            Self::Transient { status, .. } => match status {
                None => true,
                Some(code) => is_retryable_status(*code),
            },
            Self::Unavailable { .. } | Self::Rejected { .. } | Self::EmptyLabel => false,
        }
    }
}

/// HTTP statuses worth retrying.
pub fn is_retryable_status(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 529)
}

impl IzeErrorCode for LabelError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Unavailable { .. } => error_code::LABEL_UNAVAILABLE,
            Self::Timeout { .. } => error_code::LABEL_TIMEOUT,
            Self::Transient { .. } => error_code::LABEL_TRANSIENT,
            Self::Rejected { .. } => error_code::LABEL_REJECTED,
            Self::EmptyLabel => error_code::LABEL_EMPTY,
        }
    }
}
