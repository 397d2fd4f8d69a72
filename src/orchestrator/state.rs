//! Request lifecycle types.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::api::{ApiError, GENERATE_FALLBACK};
use crate::artifact::WordCloudArtifact;
use crate::input::InputError;
use crate::settings::NormalizeError;

/// Monotonically increasing identifier of an issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestToken(pub u64);

impl RequestToken {
    /// The token after this one.
    pub fn next(self) -> Self {
        RequestToken(self.0 + 1)
    }
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Why the current generation or permalink load failed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenerationError {
    /// The backend's own message, or [`GENERATE_FALLBACK`] when it gave none.
    #[error("{0}")]
    Network(String),

    #[error("Word cloud not found: {0}")]
    NotFound(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
}

impl From<ApiError> for GenerationError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::NotFound(id) => GenerationError::NotFound(id),
            ApiError::Rejected(msg) => GenerationError::Network(msg),
            ApiError::Transport(_) | ApiError::Decode(_) => {
                GenerationError::Network(GENERATE_FALLBACK.to_string())
            }
        }
    }
}

/// Lifecycle of the orchestrator's single logical request slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum GenerationState {
    #[default]
    Idle,
    Loading(RequestToken),
    Success(Arc<WordCloudArtifact>),
    Error(GenerationError),
}

impl GenerationState {
    /// Lowercase state name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            GenerationState::Idle => "idle",
            GenerationState::Loading(_) => "loading",
            GenerationState::Success(_) => "success",
            GenerationState::Error(_) => "error",
        }
    }

    /// True in `Loading`.
    pub fn is_loading(&self) -> bool {
        matches!(self, GenerationState::Loading(_))
    }
}

/// Reasons a request is refused before any network call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitError {
    #[error("A generation is already in progress")]
    Busy,

    #[error("Viewing a saved word cloud; start a new one to generate")]
    ReadOnly,

    #[error("A word cloud is already displayed; start a new one to generate again")]
    HasResult,

    #[error("Nothing to retry")]
    NothingToRetry,

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Settings(#[from] NormalizeError),
}

impl SubmitError {
    /// True when the refusal came from validating user input.
    pub fn is_validation(&self) -> bool {
        matches!(self, SubmitError::Input(_) | SubmitError::Settings(_))
    }
}

/// The result of running a [`PendingGeneration`](super::PendingGeneration).
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub token: RequestToken,
    pub outcome: Result<WordCloudArtifact, GenerationError>,
}

/// What [`Orchestrator::apply`](super::Orchestrator::apply) did with a completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The completion belonged to the latest request and set the state.
    Current,
    /// A newer request (or a reset) superseded it; it was discarded.
    Stale,
}
