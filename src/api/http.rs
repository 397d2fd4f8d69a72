//! reqwest-backed backend client

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use super::error::{ApiError, FILE_FALLBACK, GENERATE_FALLBACK, URL_FALLBACK};
use super::wire::{
    DashboardResponse, ExtractResponse, GeneratePayload, GenerateResponse, PermalinkResponse,
    UrlPayload,
};
use super::WordCloudApi;
use crate::artifact::WordCloudArtifact;
use crate::config::ApiConfig;
use crate::input::{ExtractedText, FileUpload, TextExtractor};
use crate::live::Statistics;
use crate::request::GenerationRequest;

/// HTTP+JSON client for the word cloud backend.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    base_url: Url,
}

impl HttpApi {
    /// Create a client rooted at `base_url` (must be http or https).
    ///
    /// `timeout` bounds each request at the transport level.
    pub fn new(base_url: &str, timeout: Duration, user_agent: &str) -> Result<Self, ApiError> {
        let base_url = parse_base_url(base_url)?;
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client, base_url })
    }

    /// Create a client from the `[api]` config section.
    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        // Uploads may be slow; the longer of the two timeouts bounds the transport.
        let timeout = config.request_timeout().max(config.upload_timeout());
        Self::new(&config.base_url, timeout, &config.user_agent)
    }

    /// Root URL every endpoint is built from.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/api/{segments...}`, each segment percent-encoded.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().push("api").extend(segments);
        }
        url
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    let url = Url::parse(raw.trim())
        .map_err(|e| ApiError::Transport(format!("invalid base URL '{}': {}", raw, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ApiError::Transport(format!(
            "unsupported base URL scheme '{}'",
            other
        ))),
    }
}

/// Read a JSON body regardless of status; backends report failures as
/// `{success: false, error}` on 4xx/5xx too.
async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<(StatusCode, T), ApiError> {
    let status = response.status();
    let bytes = response.bytes().await?;
    match serde_json::from_slice::<T>(&bytes) {
        Ok(body) => Ok((status, body)),
        Err(_) if !status.is_success() => Err(ApiError::Transport(format!("HTTP {}", status))),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}

#[async_trait]
impl WordCloudApi for HttpApi {
    async fn generate(&self, request: &GenerationRequest) -> Result<WordCloudArtifact, ApiError> {
        let url = self.endpoint(&["generate_wordcloud"]);
        debug!(chars = request.text().len(), "POST {}", url);

        let response = self
            .client
            .post(url)
            .json(&GeneratePayload::from(request))
            .send()
            .await?;
        let (_, body) = read_json::<GenerateResponse>(response).await?;

        if body.success {
            body.into_artifact()
        } else {
            Err(ApiError::rejected(body.error, GENERATE_FALLBACK))
        }
    }

    async fn fetch_permalink(&self, id: &str) -> Result<WordCloudArtifact, ApiError> {
        let mut url = self.endpoint(&["export", id]);
        url.query_pairs_mut().append_pair("format", "json");
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(id.to_string()));
        }
        let (_, body) = read_json::<PermalinkResponse>(response).await?;

        match body.wordcloud {
            Some(record) if body.success => record.into_artifact(),
            _ => Err(ApiError::NotFound(id.to_string())),
        }
    }

    async fn dashboard_statistics(&self) -> Result<Statistics, ApiError> {
        let url = self.endpoint(&["analytics", "dashboard"]);
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let (_, body) = read_json::<DashboardResponse>(response).await?;
        body.statistics
            .ok_or_else(|| ApiError::Decode("dashboard response has no statistics".to_string()))
    }
}

#[async_trait]
impl TextExtractor for HttpApi {
    async fn extract_file(&self, upload: &FileUpload) -> Result<ExtractedText, ApiError> {
        let url = self.endpoint(&["upload_file"]);
        debug!(bytes = upload.bytes.len(), "POST {} (multipart)", url);

        let part = Part::bytes(upload.bytes.clone())
            .file_name(upload.file_name.clone())
            .mime_str(upload.mime_type())?;
        let form = Form::new().part("file", part);

        let response = self.client.post(url).multipart(form).send().await?;
        let (_, body) = read_json::<ExtractResponse>(response).await?;
        body.into_extracted(FILE_FALLBACK)
    }

    async fn extract_url(&self, target: &str) -> Result<ExtractedText, ApiError> {
        let url = self.endpoint(&["process_url"]);
        debug!("POST {}", url);

        let response = self
            .client
            .post(url)
            .json(&UrlPayload { url: target })
            .send()
            .await?;
        let (_, body) = read_json::<ExtractResponse>(response).await?;
        body.into_extracted(URL_FALLBACK)
    }
}
