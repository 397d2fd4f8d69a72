//! The word cloud artifact produced by one successful generation

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Overall sentiment of the source text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    /// -1.0 (negative) ..= 1.0 (positive)
    pub polarity: f64,
    /// 0.0 (objective) ..= 1.0 (subjective)
    pub subjectivity: f64,
}

impl Sentiment {
    /// Build a sentiment, clamping both values into their ranges.
    pub fn new(polarity: f64, subjectivity: f64) -> Self {
        Self {
            polarity: polarity.clamp(-1.0, 1.0),
            subjectivity: subjectivity.clamp(0.0, 1.0),
        }
    }

    /// Classify polarity into a label.
    pub fn label(&self) -> SentimentLabel {
        if self.polarity > 0.2 {
            SentimentLabel::Positive
        } else if self.polarity < -0.2 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
    Unknown,
}

impl SentimentLabel {
    /// Display name of the label.
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Unknown => "Unknown",
        }
    }
}

/// Text statistics reported by the backend.
///
/// The well-known counters are typed; anything else the backend sends is
/// kept verbatim in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextStatistics {
    pub total_words: Option<u64>,
    pub unique_words: Option<u64>,
    pub text_length: Option<u64>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Complete output of one generation or permalink fetch.
///
/// Immutable once built; shared read-only as `Arc<WordCloudArtifact>`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordCloudArtifact {
    /// PNG image, base64 encoded
    pub image_base64: String,
    pub word_frequencies: BTreeMap<String, u64>,
    /// Example sentences per word, in document order
    pub word_context: BTreeMap<String, Vec<String>>,
    pub sentiment: Option<Sentiment>,
    /// Backend ranking, highest count first
    pub top_words: Vec<(String, u64)>,
    pub stats: TextStatistics,
    /// Set for permalink artifacts
    pub title: Option<String>,
    /// Set for permalink artifacts
    pub created_at: Option<String>,
}
