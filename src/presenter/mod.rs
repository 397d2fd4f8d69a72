//! Result presentation
//!
//! [`ResultPresenter`] indexes a read-only artifact snapshot for exploration
//! (ranked frequencies, per-word context, sentiment) and export (image
//! download, clipboard, CSV). It never mutates the artifact.

mod error;

pub use error::ExportError;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, NaiveDateTime};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

use crate::artifact::{Sentiment, SentimentLabel, TextStatistics, WordCloudArtifact};
use crate::clipboard::{ClipboardError, Copy, CopyResult};

/// Number of words shown in the ranked frequency view.
pub const DEFAULT_RANK_LIMIT: usize = 20;
pub const DOWNLOAD_FILE_NAME: &str = "word-cloud.png";
pub const PNG_MIME: &str = "image/png";
pub const CSV_MIME: &str = "text/csv";

/// Frequency and example sentences for one word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordLookup {
    pub word: String,
    /// 0 when the word is not in the cloud
    pub frequency: u64,
    /// Empty when no context was recorded
    pub context: Vec<String>,
}

/// One row of the top-words bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct WordBar {
    pub word: String,
    pub count: u64,
    /// `count / max count`, in 0.0..=1.0
    pub ratio: f64,
}

/// A file ready to be handed to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadAction {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl DownloadAction {
    /// Write into `dir` (created if missing) under the action's file name.
    pub fn save_in(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        self.save_as(&path)?;
        Ok(path)
    }

    /// Write the image to exactly `path`.
    pub fn save_as(&self, path: &Path) -> Result<(), ExportError> {
        fs::write(path, &self.bytes)?;
        debug!(path = %path.display(), bytes = self.bytes.len(), "export written");
        Ok(())
    }
}

/// Decode a base64 image payload, accepting an optional `data:` URL prefix.
pub fn decode_image(image_base64: &str) -> Result<Vec<u8>, ExportError> {
    let payload = match image_base64.trim().split_once(";base64,") {
        Some((prefix, data)) if prefix.starts_with("data:") => data,
        _ => image_base64.trim(),
    };
    if payload.is_empty() {
        return Err(ExportError::NoImage);
    }
    let compact: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
    STANDARD
        .decode(compact)
        .map_err(|e| ExportError::InvalidImage(e.to_string()))
}

/// RFC 3339, or ISO 8601 without an offset (wall time is kept either way).
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").ok()
}

/// Read-only view over one artifact.
#[derive(Debug, Clone)]
pub struct ResultPresenter {
    artifact: Arc<WordCloudArtifact>,
}

impl ResultPresenter {
    /// Create a presenter over a shared artifact.
    pub fn new(artifact: Arc<WordCloudArtifact>) -> Self {
        Self { artifact }
    }

    /// The underlying artifact.
    pub fn artifact(&self) -> &WordCloudArtifact {
        &self.artifact
    }

    /// The `limit` most frequent words: count descending, then word ascending.
    pub fn ranked_frequencies(&self, limit: usize) -> Vec<(String, u64)> {
        let mut ranked: Vec<(&String, &u64)> = self.artifact.word_frequencies.iter().collect();
        ranked.sort_by(|(wa, ca), (wb, cb)| cb.cmp(ca).then_with(|| wa.cmp(wb)));
        ranked
            .into_iter()
            .take(limit)
            .map(|(w, c)| (w.clone(), *c))
            .collect()
    }

    /// Frequency and context sentences for `word`; zero and empty when unknown.
    pub fn lookup(&self, word: &str) -> WordLookup {
        let word = word.trim();
        WordLookup {
            word: word.to_string(),
            frequency: self
                .artifact
                .word_frequencies
                .get(word)
                .copied()
                .unwrap_or(0),
            context: self
                .artifact
                .word_context
                .get(word)
                .cloned()
                .unwrap_or_default(),
        }
    }

    /// Text statistics as reported by the backend.
    pub fn stats(&self) -> &TextStatistics {
        &self.artifact.stats
    }

    /// Raw sentiment scores, if analysed.
    pub fn sentiment(&self) -> Option<&Sentiment> {
        self.artifact.sentiment.as_ref()
    }

    /// Sentiment label, `Unknown` when not analysed.
    pub fn sentiment_label(&self) -> SentimentLabel {
        self.sentiment()
            .map(Sentiment::label)
            .unwrap_or(SentimentLabel::Unknown)
    }

    /// Creation time of a saved artifact as `YYYY-MM-DD HH:MM`.
    ///
    /// Timestamps that do not parse are returned as received.
    pub fn created_label(&self) -> Option<String> {
        let raw = self.artifact.created_at.as_deref()?;
        Some(
            parse_timestamp(raw)
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| raw.to_string()),
        )
    }

    /// Number of distinct words in the frequency table.
    pub fn unique_word_count(&self) -> usize {
        self.artifact.word_frequencies.len()
    }

    /// Shown under the ranked view when it hides words.
    pub fn truncation_note(&self) -> Option<String> {
        let total = self.unique_word_count();
        (total > DEFAULT_RANK_LIMIT).then(|| {
            format!(
                "Showing top {} words. Total: {} unique words",
                DEFAULT_RANK_LIMIT, total
            )
        })
    }

    /// The backend's top words scaled against the largest count.
    pub fn top_word_bars(&self) -> Vec<WordBar> {
        let max = self
            .artifact
            .top_words
            .iter()
            .map(|(_, c)| *c)
            .max()
            .filter(|m| *m > 0)
            .unwrap_or(1);
        self.artifact
            .top_words
            .iter()
            .map(|(word, count)| WordBar {
                word: word.clone(),
                count: *count,
                ratio: *count as f64 / max as f64,
            })
            .collect()
    }

    /// Decoded PNG bytes.
    pub fn image_bytes(&self) -> Result<Vec<u8>, ExportError> {
        decode_image(&self.artifact.image_base64)
    }

    /// Download action with the default file name.
    pub fn export_download(&self) -> Result<DownloadAction, ExportError> {
        self.export_download_as(DOWNLOAD_FILE_NAME)
    }

    /// Download action with a caller-chosen file name.
    pub fn export_download_as(&self, file_name: &str) -> Result<DownloadAction, ExportError> {
        Ok(DownloadAction {
            file_name: file_name.to_string(),
            mime_type: PNG_MIME,
            bytes: self.image_bytes()?,
        })
    }

    /// Put the image on the clipboard. A missing image is
    /// [`ClipboardError::EmptyImage`], an undecodable one
    /// [`ClipboardError::InvalidImage`]; nothing here touches the artifact.
    pub fn export_clipboard(&self, copy: &Copy) -> Result<CopyResult, ClipboardError> {
        let bytes = self.image_bytes().map_err(|e| {
            debug!("image decode failed before clipboard copy: {}", e);
            match e {
                ExportError::NoImage => ClipboardError::EmptyImage,
                other => ClipboardError::InvalidImage(other.to_string()),
            }
        })?;
        copy.image(&bytes)
    }

    /// All words as `Word,Frequency` CSV in ranked order.
    pub fn export_csv(&self) -> Result<String, ExportError> {
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());
        writer.write_record(["Word", "Frequency"])?;
        for (word, count) in self.ranked_frequencies(usize::MAX) {
            writer.write_record([word, count.to_string()])?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| ExportError::Io(e.into_error()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
