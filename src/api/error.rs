//! Backend call errors.

/// Generic message used when the backend rejects a generation without saying why.
pub const GENERATE_FALLBACK: &str = "An error occurred while generating the word cloud";
/// Generic message for a failed file extraction.
pub const FILE_FALLBACK: &str = "Failed to extract text from file";
/// Generic message for a failed URL extraction.
pub const URL_FALLBACK: &str = "Failed to extract text from URL";

/// Errors at the backend boundary.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The backend answered and reported a failure; message is verbatim.
    #[error("{0}")]
    Rejected(String),

    /// The request never produced a usable HTTP response.
    #[error("Network error: {0}")]
    Transport(String),

    #[error("Word cloud not found: {0}")]
    NotFound(String),

    /// The backend answered with a body we could not make sense of.
    #[error("Invalid response from backend: {0}")]
    Decode(String),
}

impl ApiError {
    /// The message to show a user, without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            ApiError::Rejected(msg)
            | ApiError::Transport(msg)
            | ApiError::NotFound(msg)
            | ApiError::Decode(msg) => msg,
        }
    }

    /// Build a `Rejected` error, substituting `fallback` for a missing or blank message.
    pub fn rejected(message: Option<String>, fallback: &str) -> Self {
        match message {
            Some(msg) if !msg.trim().is_empty() => ApiError::Rejected(msg),
            _ => ApiError::Rejected(fallback.to_string()),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}
