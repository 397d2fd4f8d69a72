//! Input ingestion errors.

use std::time::Duration;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("Text must be at least {min} characters long (got {actual})")]
    InsufficientText { min: usize, actual: usize },

    #[error("Please enter a valid URL starting with http:// or https:// (got '{0}')")]
    InvalidUrl(String),

    /// Upstream extraction failed; the message is the extractor's own.
    #[error("{0}")]
    ExtractionFailed(String),

    #[error("Text extraction timed out after {0:?}")]
    Timeout(Duration),
}

impl InputError {
    /// True for failures detected locally, before any network call.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            InputError::InsufficientText { .. } | InputError::InvalidUrl(_)
        )
    }
}
