//! Word Cloud Generator (wcgen) Library
//!
//! Client-side orchestration for a word cloud rendering backend: gathers
//! text from a source, normalizes generation options, drives the request
//! lifecycle and indexes the returned artifact for exploration and export.

pub mod api;
pub mod artifact;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod input;
pub mod live;
pub mod logging;
pub mod orchestrator;
pub mod presenter;
pub mod request;
pub mod settings;

pub use api::{ApiError, HttpApi, WordCloudApi};
pub use artifact::WordCloudArtifact;
pub use config::Config;
pub use error::{Error, ErrorKind, Result};
pub use input::{InputAggregator, Source, TextExtractor};
pub use live::{Dashboard, LiveUpdateChannel, Statistics};
pub use orchestrator::{GenerationState, Orchestrator, ViewMode};
pub use presenter::ResultPresenter;
pub use request::GenerationRequest;
pub use settings::{normalize, RawOptions, Settings};
