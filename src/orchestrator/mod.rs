//! Generation request orchestration
//!
//! [`Orchestrator`] owns the request lifecycle (`Idle -> Loading -> Success |
//! Error -> Idle`) and the [`ViewMode`] derived from navigation state.
//!
//! A generation is split in three steps so that several can be in flight:
//!
//! 1. [`Orchestrator::submit`] / [`Orchestrator::supersede`] validate the
//!    lifecycle, allocate a [`RequestToken`] and return a [`PendingGeneration`].
//! 2. [`PendingGeneration::run`] performs the network call. It holds no
//!    borrow of the orchestrator.
//! 3. [`Orchestrator::apply`] stores the result only if its token is still the
//!    latest; older completions are discarded.
//!
//! [`Orchestrator::generate`] chains the three for the common case.

mod navigation;
mod state;

pub use navigation::{
    InvalidLocation, Location, MemoryNavigator, Navigator, ViewMode, DEFAULT_LOCATION, ID_PARAM,
};
pub use state::{Applied, Completion, GenerationError, GenerationState, RequestToken, SubmitError};

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::api::WordCloudApi;
use crate::artifact::WordCloudArtifact;
use crate::presenter::ResultPresenter;
use crate::request::GenerationRequest;
use crate::settings::{normalize, RawOptions};

/// Validate text and raw options into a request. Never touches the network.
pub fn prepare(text: &str, options: &RawOptions) -> Result<GenerationRequest, SubmitError> {
    let settings = normalize(options)?;
    Ok(GenerationRequest::new(text, settings)?)
}

/// A generation that has been issued but not yet performed.
pub struct PendingGeneration {
    token: RequestToken,
    request: GenerationRequest,
    api: Arc<dyn WordCloudApi>,
    timeout: Duration,
}

impl PendingGeneration {
    /// Token issued for this generation.
    pub fn token(&self) -> RequestToken {
        self.token
    }

    /// The request that will be sent.
    pub fn request(&self) -> &GenerationRequest {
        &self.request
    }

    /// Perform the generation call, bounded by the orchestrator's timeout.
    pub async fn run(self) -> Completion {
        debug!(token = %self.token, chars = self.request.text().len(), "generation started");
        let outcome = match tokio::time::timeout(self.timeout, self.api.generate(&self.request))
            .await
        {
            Ok(Ok(artifact)) => Ok(artifact),
            Ok(Err(err)) => {
                warn!(token = %self.token, "generation failed: {}", err);
                Err(GenerationError::from(err))
            }
            Err(_) => {
                warn!(token = %self.token, "generation timed out after {:?}", self.timeout);
                Err(GenerationError::Timeout(self.timeout))
            }
        };
        Completion {
            token: self.token,
            outcome,
        }
    }
}

/// Owns the generation state, the view mode and the latest request token.
pub struct Orchestrator {
    api: Arc<dyn WordCloudApi>,
    navigator: Box<dyn Navigator>,
    /// Location read once at construction
    location: Location,
    timeout: Duration,
    state: GenerationState,
    view_mode: ViewMode,
    latest: RequestToken,
    last_request: Option<GenerationRequest>,
}

impl Orchestrator {
    /// Create an orchestrator; the navigator's location is read here and
    /// nowhere else.
    pub fn new(
        api: Arc<dyn WordCloudApi>,
        navigator: Box<dyn Navigator>,
        timeout: Duration,
    ) -> Self {
        let location = navigator.location();
        let view_mode = ViewMode::from_location(&location);
        debug!(location = %location, ?view_mode, "orchestrator created");
        Self {
            api,
            navigator,
            location,
            timeout,
            state: GenerationState::Idle,
            view_mode,
            latest: RequestToken::default(),
            last_request: None,
        }
    }

    /// In permalink mode, fetch the persisted artifact. A no-op in fresh mode.
    pub async fn initialize(&mut self) -> &GenerationState {
        let Some(id) = self.view_mode.permalink_id().map(str::to_string) else {
            return &self.state;
        };
        if !matches!(self.state, GenerationState::Idle) {
            return &self.state;
        }

        let token = self.issue();
        debug!(%token, id = %id, "loading permalink");

        let fetch = self.api.fetch_permalink(&id);
        let outcome = match tokio::time::timeout(self.timeout, fetch).await {
            Ok(Ok(artifact)) => {
                info!(id = %id, words = artifact.word_frequencies.len(), "permalink loaded");
                Ok(artifact)
            }
            Ok(Err(err)) => {
                warn!(id = %id, "permalink fetch failed: {}", err);
                Err(GenerationError::NotFound(id))
            }
            Err(_) => {
                warn!(id = %id, "permalink fetch timed out after {:?}", self.timeout);
                Err(GenerationError::Timeout(self.timeout))
            }
        };
        self.apply(Completion { token, outcome });
        &self.state
    }

    /// Issue a generation. Only valid from `Idle` or `Error` in fresh mode.
    pub fn submit(&mut self, request: GenerationRequest) -> Result<PendingGeneration, SubmitError> {
        self.check_writable()?;
        match self.state {
            GenerationState::Loading(_) => return Err(SubmitError::Busy),
            GenerationState::Success(_) => return Err(SubmitError::HasResult),
            GenerationState::Idle | GenerationState::Error(_) => {}
        }
        Ok(self.pending(request))
    }

    /// Like [`submit`](Self::submit), but also allowed while `Loading`.
    ///
    /// The in-flight request keeps running; its completion becomes stale.
    pub fn supersede(
        &mut self,
        request: GenerationRequest,
    ) -> Result<PendingGeneration, SubmitError> {
        self.check_writable()?;
        if let GenerationState::Success(_) = self.state {
            return Err(SubmitError::HasResult);
        }
        if let GenerationState::Loading(previous) = self.state {
            debug!(%previous, "superseding in-flight generation");
        }
        Ok(self.pending(request))
    }

    /// Resubmit the last request after an error.
    pub fn retry(&mut self) -> Result<PendingGeneration, SubmitError> {
        let request = match (&self.state, &self.last_request) {
            (GenerationState::Error(_), Some(request)) => request.clone(),
            _ => return Err(SubmitError::NothingToRetry),
        };
        self.submit(request)
    }

    /// Store a completion if it belongs to the latest request.
    pub fn apply(&mut self, completion: Completion) -> Applied {
        let current = matches!(self.state, GenerationState::Loading(t) if t == completion.token);
        if !current {
            warn!(
                token = %completion.token,
                latest = %self.latest,
                state = self.state.name(),
                "discarding stale result"
            );
            return Applied::Stale;
        }

        self.state = match completion.outcome {
            Ok(artifact) => {
                info!(
                    token = %completion.token,
                    words = artifact.word_frequencies.len(),
                    "generation succeeded"
                );
                GenerationState::Success(Arc::new(artifact))
            }
            Err(err) => GenerationState::Error(err),
        };
        Applied::Current
    }

    /// Submit, run and apply in one step.
    pub async fn generate(&mut self, request: GenerationRequest) -> Result<Applied, SubmitError> {
        let pending = self.submit(request)?;
        let completion = pending.run().await;
        Ok(self.apply(completion))
    }

    /// Return to `Idle`/`Fresh`, dropping any artifact or error.
    ///
    /// In permalink mode the identifier is removed from the navigation state.
    /// The last request is kept so the user's input survives.
    pub fn reset(&mut self) {
        debug!(state = self.state.name(), "reset");
        self.state = GenerationState::Idle;
        if self.view_mode.is_permalink() {
            let location = self.location.without_id();
            self.navigator.replace(location.clone());
            self.location = location;
            self.view_mode = ViewMode::Fresh;
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> &GenerationState {
        &self.state
    }

    /// Whether a fresh generator or a permalink is shown.
    pub fn view_mode(&self) -> &ViewMode {
        &self.view_mode
    }

    /// True while a request is in flight.
    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Regeneration controls are disabled in permalink mode.
    pub fn is_read_only(&self) -> bool {
        self.view_mode.is_permalink()
    }

    /// Token of the most recently issued request.
    pub fn latest_token(&self) -> RequestToken {
        self.latest
    }

    /// The shown artifact, when in `Success`.
    pub fn artifact(&self) -> Option<Arc<WordCloudArtifact>> {
        match &self.state {
            GenerationState::Success(artifact) => Some(Arc::clone(artifact)),
            _ => None,
        }
    }

    /// The stored error, when in `Error`.
    pub fn error(&self) -> Option<&GenerationError> {
        match &self.state {
            GenerationState::Error(err) => Some(err),
            _ => None,
        }
    }

    /// The last request issued, kept across `reset` for retry.
    pub fn last_request(&self) -> Option<&GenerationRequest> {
        self.last_request.as_ref()
    }

    /// A presenter over a snapshot of the current artifact.
    pub fn presenter(&self) -> Option<ResultPresenter> {
        self.artifact().map(ResultPresenter::new)
    }

    /// Navigation surface the view mode is read from.
    pub fn navigator(&self) -> &dyn Navigator {
        self.navigator.as_ref()
    }

    fn check_writable(&self) -> Result<(), SubmitError> {
        if self.view_mode.is_permalink() {
            return Err(SubmitError::ReadOnly);
        }
        Ok(())
    }

    fn issue(&mut self) -> RequestToken {
        self.latest = self.latest.next();
        self.state = GenerationState::Loading(self.latest);
        self.latest
    }

    fn pending(&mut self, request: GenerationRequest) -> PendingGeneration {
        let token = self.issue();
        debug!(%token, "generation issued");
        self.last_request = Some(request.clone());
        PendingGeneration {
            token,
            request,
            api: Arc::clone(&self.api),
            timeout: self.timeout,
        }
    }
}
