//! Backend boundary
//!
//! [`WordCloudApi`] is the seam between request orchestration and the
//! rendering backend. [`HttpApi`] is the reqwest implementation; tests use
//! in-process stubs.

mod error;
mod http;
pub mod wire;

pub use error::{ApiError, FILE_FALLBACK, GENERATE_FALLBACK, URL_FALLBACK};
pub use http::HttpApi;

use async_trait::async_trait;

use crate::artifact::WordCloudArtifact;
use crate::live::Statistics;
use crate::request::GenerationRequest;

/// Calls the orchestrator and dashboard make against the backend.
#[async_trait]
pub trait WordCloudApi: Send + Sync {
    /// `POST generate_wordcloud`
    async fn generate(&self, request: &GenerationRequest) -> Result<WordCloudArtifact, ApiError>;

    /// `GET export/{id}?format=json`
    async fn fetch_permalink(&self, id: &str) -> Result<WordCloudArtifact, ApiError>;

    /// `GET analytics/dashboard`
    async fn dashboard_statistics(&self) -> Result<Statistics, ApiError>;
}
