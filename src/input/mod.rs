//! Input aggregation
//!
//! Turns one of three source modes (typed text, an uploaded file, a URL)
//! into plain text. Files and URLs are handed to a [`TextExtractor`]; this
//! module performs no extraction itself and never retries.

mod error;

pub use error::InputError;

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::api::{ApiError, FILE_FALLBACK, URL_FALLBACK};

/// Minimum number of characters (after trimming) a text must have.
pub const MIN_TEXT_CHARS: usize = 10;

/// File extensions the extraction service understands.
pub const SUPPORTED_EXTENSIONS: [&str; 9] = [
    "txt", "pdf", "docx", "doc", "csv", "xlsx", "xls", "html", "htm",
];

/// A file selected for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct FileUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    /// Create an upload from a name and its bytes.
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Read a file from disk, keeping only its base name.
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        Ok(Self { file_name, bytes })
    }

    /// Lowercased file extension, if any.
    pub fn extension(&self) -> Option<String> {
        PathBuf::from(&self.file_name)
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
    }

    /// True when the extraction service accepts this extension.
    pub fn is_supported(&self) -> bool {
        self.extension()
            .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
    }

    /// MIME type sent with the multipart part.
    pub fn mime_type(&self) -> &'static str {
        match self.extension().as_deref() {
            Some("txt") => "text/plain",
            Some("pdf") => "application/pdf",
            Some("docx") => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            Some("doc") => "application/msword",
            Some("csv") => "text/csv",
            Some("xlsx") => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            Some("xls") => "application/vnd.ms-excel",
            Some("html") | Some("htm") => "text/html",
            _ => "application/octet-stream",
        }
    }
}

/// Text obtained from a source, with whatever metadata the extractor reported.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedText {
    pub text: String,
    pub file_type: Option<String>,
    /// Page title, for URL sources
    pub title: Option<String>,
    pub word_count: Option<u64>,
    pub character_count: Option<u64>,
}

impl ExtractedText {
    /// Text with no extraction metadata.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

/// External text-extraction service.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// `POST upload_file` (multipart field `file`)
    async fn extract_file(&self, upload: &FileUpload) -> Result<ExtractedText, ApiError>;

    /// `POST process_url`
    async fn extract_url(&self, url: &str) -> Result<ExtractedText, ApiError>;
}

/// Where the raw text comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    Text(String),
    File(FileUpload),
    Url(String),
}

impl Source {
    /// Short name of the source mode.
    pub fn mode(&self) -> &'static str {
        match self {
            Source::Text(_) => "text",
            Source::File(_) => "file",
            Source::Url(_) => "url",
        }
    }
}

/// True if `url` starts with `http://` or `https://`, ignoring case.
pub fn has_http_scheme(url: &str) -> bool {
    let lower = url.get(..8).unwrap_or(url).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Converts a [`Source`] into plain text.
pub struct InputAggregator {
    extractor: Arc<dyn TextExtractor>,
    timeout: Duration,
}

impl InputAggregator {
    /// Create an aggregator bounding each extraction call by `timeout`.
    pub fn new(extractor: Arc<dyn TextExtractor>, timeout: Duration) -> Self {
        Self { extractor, timeout }
    }

    /// Turn any source into plain text.
    pub async fn ingest(&self, source: &Source) -> Result<ExtractedText, InputError> {
        match source {
            Source::Text(raw) => self.ingest_text(raw).map(ExtractedText::plain),
            Source::File(upload) => self.ingest_file(upload).await,
            Source::Url(url) => self.ingest_url(url).await,
        }
    }

    /// Trim typed text and require [`MIN_TEXT_CHARS`] characters. Local only.
    pub fn ingest_text(&self, raw: &str) -> Result<String, InputError> {
        let text = raw.trim();
        let actual = text.chars().count();
        if actual < MIN_TEXT_CHARS {
            return Err(InputError::InsufficientText {
                min: MIN_TEXT_CHARS,
                actual,
            });
        }
        Ok(text.to_string())
    }

    /// Extract text from an uploaded file.
    pub async fn ingest_file(&self, upload: &FileUpload) -> Result<ExtractedText, InputError> {
        if !upload.is_supported() {
            debug!(file = %upload.file_name, "uploading file with unrecognized extension");
        }
        let call = self.extractor.extract_file(upload);
        self.finish(call, FILE_FALLBACK).await
    }

    /// Reject anything without an http(s) scheme before touching the network.
    pub async fn ingest_url(&self, url: &str) -> Result<ExtractedText, InputError> {
        let url = url.trim();
        if !has_http_scheme(url) {
            return Err(InputError::InvalidUrl(url.to_string()));
        }
        let call = self.extractor.extract_url(url);
        self.finish(call, URL_FALLBACK).await
    }

    async fn finish(
        &self,
        call: impl std::future::Future<Output = Result<ExtractedText, ApiError>>,
        fallback: &str,
    ) -> Result<ExtractedText, InputError> {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(Ok(extracted)) => Ok(extracted),
            Ok(Err(err)) => {
                warn!("text extraction failed: {}", err);
                let message = err.message().trim();
                Err(InputError::ExtractionFailed(if message.is_empty() {
                    fallback.to_string()
                } else {
                    message.to_string()
                }))
            }
            Err(_) => {
                warn!("text extraction timed out after {:?}", self.timeout);
                Err(InputError::Timeout(self.timeout))
            }
        }
    }
}
