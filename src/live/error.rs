//! Live update errors.

use std::time::Duration;

use crate::api::ApiError;

#[derive(Debug, thiserror::Error)]
pub enum LiveError {
    #[error("Failed to load statistics: {0}")]
    Fetch(#[from] ApiError),

    #[error("Statistics request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Malformed live update: {0}")]
    MalformedPayload(String),

    #[error("Live update stream failed: {0}")]
    Io(#[from] std::io::Error),
}
