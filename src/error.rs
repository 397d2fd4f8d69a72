//! Crate-wide error type
//!
//! Each subsystem has its own error enum; [`Error`] wraps them so callers can
//! classify a failure without matching every variant.

use crate::api::ApiError;
use crate::clipboard::ClipboardError;
use crate::input::InputError;
use crate::live::LiveError;
use crate::orchestrator::{GenerationError, SubmitError};
use crate::presenter::ExportError;
use crate::settings::NormalizeError;

/// Broad failure classes shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Local, pre-network
    Validation,
    /// File or URL text extraction failed upstream
    Extraction,
    /// Generation, permalink or statistics call failed
    Network,
    NotFound,
    Clipboard,
    Export,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Settings(#[from] NormalizeError),

    #[error(transparent)]
    Submit(#[from] SubmitError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error(transparent)]
    Live(#[from] LiveError),
}

impl Error {
    /// Category of the error, for choosing how to present it.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Settings(_) => ErrorKind::Validation,
            Error::Input(err) => input_kind(err),
            Error::Submit(SubmitError::Input(err)) => input_kind(err),
            Error::Submit(_) => ErrorKind::Validation,
            Error::Generation(GenerationError::NotFound(_)) => ErrorKind::NotFound,
            Error::Generation(_) => ErrorKind::Network,
            Error::Api(ApiError::NotFound(_)) => ErrorKind::NotFound,
            Error::Api(_) => ErrorKind::Network,
            Error::Live(_) => ErrorKind::Network,
            Error::Export(_) => ErrorKind::Export,
            Error::Clipboard(_) => ErrorKind::Clipboard,
        }
    }

    /// Failed before any network call was made.
    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }

    /// The user can act on this by resubmitting or retrying the export.
    /// Only an unresolvable permalink is not.
    pub fn is_recoverable(&self) -> bool {
        self.kind() != ErrorKind::NotFound
    }
}

fn input_kind(err: &InputError) -> ErrorKind {
    match err {
        InputError::InsufficientText { .. } | InputError::InvalidUrl(_) => ErrorKind::Validation,
        InputError::ExtractionFailed(_) => ErrorKind::Extraction,
        InputError::Timeout(_) => ErrorKind::Network,
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
