//! Test helper utilities

#![allow(dead_code)]

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::collections::{BTreeMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

use wcgen::api::{ApiError, WordCloudApi};
use wcgen::artifact::{Sentiment, TextStatistics, WordCloudArtifact};
use wcgen::input::{ExtractedText, FileUpload, TextExtractor};
use wcgen::live::Statistics;
use wcgen::request::GenerationRequest;

/// Smallest valid PNG header, base64 encoded.
pub fn png_base64() -> String {
    STANDARD.encode(b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR")
}

/// An artifact counting the words of `text` the way the backend would
/// (lowercased, punctuation stripped, no stopword removal).
pub fn artifact_for(text: &str) -> WordCloudArtifact {
    let mut word_frequencies: BTreeMap<String, u64> = BTreeMap::new();
    let mut total = 0;
    for word in text.split_whitespace() {
        let word: String = word
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        if word.is_empty() {
            continue;
        }
        total += 1;
        *word_frequencies.entry(word).or_default() += 1;
    }
    let mut top_words: Vec<(String, u64)> = word_frequencies
        .iter()
        .map(|(w, c)| (w.clone(), *c))
        .collect();
    top_words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    WordCloudArtifact {
        image_base64: png_base64(),
        word_context: word_frequencies
            .keys()
            .map(|w| (w.clone(), vec![text.to_string()]))
            .collect(),
        stats: TextStatistics {
            total_words: Some(total),
            unique_words: Some(word_frequencies.len() as u64),
            text_length: Some(text.chars().count() as u64),
            ..TextStatistics::default()
        },
        word_frequencies,
        sentiment: Some(Sentiment::new(0.1, 0.4)),
        top_words,
        title: None,
        created_at: None,
    }
}

/// A saved artifact as a permalink fetch returns it.
pub fn saved_artifact(title: &str) -> WordCloudArtifact {
    WordCloudArtifact {
        title: Some(title.to_string()),
        created_at: Some("2024-03-05T14:07:09".to_string()),
        ..artifact_for("saved words saved again for later")
    }
}

/// A response the stub hands out for one call.
pub enum Reply<T> {
    Now(Result<T, ApiError>),
    /// Resolved when the test sends on the paired sender
    Gated(oneshot::Receiver<Result<T, ApiError>>),
    /// Never resolves
    Hang,
}

impl<T> Reply<T> {
    async fn resolve(self) -> Result<T, ApiError> {
        match self {
            Reply::Now(result) => result,
            Reply::Gated(rx) => rx
                .await
                .unwrap_or_else(|_| Err(ApiError::Transport("gate dropped".into()))),
            Reply::Hang => std::future::pending().await,
        }
    }
}

/// In-process backend: records every call and replays queued replies.
///
/// Generation falls back to counting the request text when nothing is queued.
#[derive(Default)]
pub struct StubApi {
    pub generate_calls: AtomicUsize,
    pub permalink_calls: AtomicUsize,
    pub dashboard_calls: AtomicUsize,
    pub file_calls: AtomicUsize,
    pub url_calls: AtomicUsize,
    generate_replies: Mutex<VecDeque<Reply<WordCloudArtifact>>>,
    permalink_replies: Mutex<VecDeque<Reply<WordCloudArtifact>>>,
    dashboard_replies: Mutex<VecDeque<Reply<Statistics>>>,
    extract_replies: Mutex<VecDeque<Reply<ExtractedText>>>,
    pub seen_texts: Mutex<Vec<String>>,
    pub seen_urls: Mutex<Vec<String>>,
}

impl StubApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_generate(&self, reply: Reply<WordCloudArtifact>) {
        self.generate_replies.lock().unwrap().push_back(reply);
    }

    /// Queue a generation that completes when the returned sender fires.
    pub fn gate_generate(&self) -> oneshot::Sender<Result<WordCloudArtifact, ApiError>> {
        let (tx, rx) = oneshot::channel();
        self.push_generate(Reply::Gated(rx));
        tx
    }

    pub fn push_permalink(&self, reply: Reply<WordCloudArtifact>) {
        self.permalink_replies.lock().unwrap().push_back(reply);
    }

    pub fn push_dashboard(&self, reply: Reply<Statistics>) {
        self.dashboard_replies.lock().unwrap().push_back(reply);
    }

    pub fn push_extract(&self, reply: Reply<ExtractedText>) {
        self.extract_replies.lock().unwrap().push_back(reply);
    }

    pub fn network_calls(&self) -> usize {
        self.generate_calls.load(Ordering::SeqCst)
            + self.permalink_calls.load(Ordering::SeqCst)
            + self.dashboard_calls.load(Ordering::SeqCst)
            + self.file_calls.load(Ordering::SeqCst)
            + self.url_calls.load(Ordering::SeqCst)
    }

    fn next<T>(queue: &Mutex<VecDeque<Reply<T>>>) -> Option<Reply<T>> {
        queue.lock().unwrap().pop_front()
    }
}

#[async_trait]
impl WordCloudApi for StubApi {
    async fn generate(&self, request: &GenerationRequest) -> Result<WordCloudArtifact, ApiError> {
        self.generate_calls.fetch_add(1, Ordering::SeqCst);
        self.seen_texts
            .lock()
            .unwrap()
            .push(request.text().to_string());
        match Self::next(&self.generate_replies) {
            Some(reply) => reply.resolve().await,
            None => Ok(artifact_for(request.text())),
        }
    }

    async fn fetch_permalink(&self, id: &str) -> Result<WordCloudArtifact, ApiError> {
        self.permalink_calls.fetch_add(1, Ordering::SeqCst);
        match Self::next(&self.permalink_replies) {
            Some(reply) => reply.resolve().await,
            None => Err(ApiError::NotFound(id.to_string())),
        }
    }

    async fn dashboard_statistics(&self) -> Result<Statistics, ApiError> {
        self.dashboard_calls.fetch_add(1, Ordering::SeqCst);
        match Self::next(&self.dashboard_replies) {
            Some(reply) => reply.resolve().await,
            None => Ok(Statistics::default()),
        }
    }
}

#[async_trait]
impl TextExtractor for StubApi {
    async fn extract_file(&self, upload: &FileUpload) -> Result<ExtractedText, ApiError> {
        self.file_calls.fetch_add(1, Ordering::SeqCst);
        match Self::next(&self.extract_replies) {
            Some(reply) => reply.resolve().await,
            None => Ok(ExtractedText {
                text: String::from_utf8_lossy(&upload.bytes).into_owned(),
                file_type: upload.extension(),
                ..ExtractedText::default()
            }),
        }
    }

    async fn extract_url(&self, url: &str) -> Result<ExtractedText, ApiError> {
        self.url_calls.fetch_add(1, Ordering::SeqCst);
        self.seen_urls.lock().unwrap().push(url.to_string());
        match Self::next(&self.extract_replies) {
            Some(reply) => reply.resolve().await,
            None => Ok(ExtractedText::plain(format!("Text fetched from {url}"))),
        }
    }
}
