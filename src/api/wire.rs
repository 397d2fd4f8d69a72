//! JSON shapes exchanged with the backend and their conversion into typed values
//!
//! Responses are decoded loosely (every field optional) and then validated:
//! a success envelope either becomes a complete [`WordCloudArtifact`] or an
//! [`ApiError::Decode`], never a partial artifact.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use super::error::ApiError;
use crate::artifact::{Sentiment, TextStatistics, WordCloudArtifact};
use crate::input::ExtractedText;
use crate::request::GenerationRequest;
use crate::settings::Settings;

/// Fixed analysis switches sent with every generation.
pub const COLLOCATIONS: bool = true;
pub const LEMMATIZE: bool = true;
pub const REMOVE_NUMBERS: bool = true;
pub const MIN_WORD_LENGTH: u32 = 2;

#[derive(Debug, Serialize)]
pub struct GeneratePayload<'a> {
    pub text: &'a str,
    pub settings: SettingsPayload<'a>,
    pub title: &'a str,
    pub tags: &'a [String],
}

#[derive(Debug, Serialize)]
pub struct SettingsPayload<'a> {
    #[serde(flatten)]
    pub settings: &'a Settings,
    pub collocations: bool,
    pub lemmatize: bool,
    pub remove_numbers: bool,
    pub min_word_length: u32,
}

impl<'a> From<&'a GenerationRequest> for GeneratePayload<'a> {
    fn from(request: &'a GenerationRequest) -> Self {
        Self {
            text: request.text(),
            settings: SettingsPayload {
                settings: request.settings(),
                collocations: COLLOCATIONS,
                lemmatize: LEMMATIZE,
                remove_numbers: REMOVE_NUMBERS,
                min_word_length: MIN_WORD_LENGTH,
            },
            title: request.title(),
            tags: request.tags(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UrlPayload<'a> {
    pub url: &'a str,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GenerateResponse {
    pub success: bool,
    pub error: Option<String>,
    pub image_base64: Option<String>,
    pub word_frequencies: Option<Value>,
    pub word_context: Option<Value>,
    pub sentiment_analysis: Option<Value>,
    pub top_words: Option<Value>,
    pub text_statistics: Option<Value>,
}

impl GenerateResponse {
    /// Convert a successful response into an artifact; an unusable image is `Decode`.
    pub fn into_artifact(self) -> Result<WordCloudArtifact, ApiError> {
        let parts = ArtifactParts {
            image_base64: self.image_base64,
            word_frequencies: self.word_frequencies,
            word_context: self.word_context,
            sentiment_analysis: self.sentiment_analysis,
            top_words: self.top_words,
        };
        let stats = statistics(self.text_statistics.as_ref(), TextStatistics::default());
        parts.build(stats, None, None)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PermalinkResponse {
    pub success: bool,
    pub error: Option<String>,
    pub wordcloud: Option<PermalinkRecord>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PermalinkRecord {
    pub image_base64: Option<String>,
    pub word_frequencies: Option<Value>,
    pub word_context: Option<Value>,
    pub sentiment_analysis: Option<Value>,
    pub top_words: Option<Value>,
    pub word_count: Option<Value>,
    pub unique_words: Option<Value>,
    pub text_statistics: Option<Value>,
    pub title: Option<String>,
    pub created_at: Option<String>,
}

impl PermalinkRecord {
    /// Stats start from the stored counters; `text_statistics` fields win.
    pub fn into_artifact(self) -> Result<WordCloudArtifact, ApiError> {
        let base = TextStatistics {
            total_words: self.word_count.as_ref().and_then(count),
            unique_words: self.unique_words.as_ref().and_then(count),
            ..TextStatistics::default()
        };
        let stats = statistics(self.text_statistics.as_ref(), base);
        let parts = ArtifactParts {
            image_base64: self.image_base64,
            word_frequencies: self.word_frequencies,
            word_context: self.word_context,
            sentiment_analysis: self.sentiment_analysis,
            top_words: self.top_words,
        };
        parts.build(stats, self.title, self.created_at)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ExtractResponse {
    pub success: bool,
    pub error: Option<String>,
    pub text: Option<String>,
    pub file_type: Option<String>,
    pub title: Option<String>,
    pub word_count: Option<Value>,
    pub character_count: Option<Value>,
}

impl ExtractResponse {
    /// Extracted text on success, `Rejected` (or `fallback`) otherwise.
    pub fn into_extracted(self, fallback: &str) -> Result<ExtractedText, ApiError> {
        if !self.success {
            return Err(ApiError::rejected(self.error, fallback));
        }
        let text = self
            .text
            .ok_or_else(|| ApiError::Decode("extraction response has no text".to_string()))?;
        Ok(ExtractedText {
            text,
            file_type: self.file_type,
            title: self.title.filter(|t| !t.is_empty()),
            word_count: self.word_count.as_ref().and_then(count),
            character_count: self.character_count.as_ref().and_then(count),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DashboardResponse {
    pub statistics: Option<crate::live::Statistics>,
}

struct ArtifactParts {
    image_base64: Option<String>,
    word_frequencies: Option<Value>,
    word_context: Option<Value>,
    sentiment_analysis: Option<Value>,
    top_words: Option<Value>,
}

impl ArtifactParts {
    fn build(
        self,
        stats: TextStatistics,
        title: Option<String>,
        created_at: Option<String>,
    ) -> Result<WordCloudArtifact, ApiError> {
        let image_base64 = self
            .image_base64
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| ApiError::Decode("response is missing image_base64".to_string()))?;

        let top_words = self
            .top_words
            .as_ref()
            .map(ranked_pairs)
            .transpose()?
            .unwrap_or_default();

        let word_frequencies = match self.word_frequencies.as_ref() {
            Some(value) => frequencies(value)?,
            None => top_words.iter().cloned().collect(),
        };

        let word_context = self
            .word_context
            .as_ref()
            .map(contexts)
            .transpose()?
            .unwrap_or_default();

        Ok(WordCloudArtifact {
            image_base64,
            word_frequencies,
            word_context,
            sentiment: self.sentiment_analysis.as_ref().and_then(sentiment),
            top_words,
            stats,
            title,
            created_at,
        })
    }
}

/// Coerce a JSON count: integers, non-negative floats (rounded) and numeric strings.
pub fn count(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f.round() as u64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn frequencies(value: &Value) -> Result<BTreeMap<String, u64>, ApiError> {
    match value {
        Value::Object(map) => Ok(map
            .iter()
            .filter_map(|(word, n)| count(n).map(|n| (word.clone(), n)))
            .collect()),
        Value::Array(_) => Ok(ranked_pairs(value)?.into_iter().collect()),
        Value::Null => Ok(BTreeMap::new()),
        other => Err(ApiError::Decode(format!(
            "word_frequencies must be an object, got {}",
            type_name(other)
        ))),
    }
}

/// Accept either `[[word, count], ...]` (order kept) or `{word: count}`
/// (ordered by count descending, then word).
fn ranked_pairs(value: &Value) -> Result<Vec<(String, u64)>, ApiError> {
    match value {
        Value::Array(items) => Ok(items
            .iter()
            .filter_map(|item| match item.as_array().map(Vec::as_slice) {
                Some([Value::String(word), n, ..]) => count(n).map(|n| (word.clone(), n)),
                _ => None,
            })
            .collect()),
        Value::Object(map) => {
            let mut pairs: Vec<(String, u64)> = map
                .iter()
                .filter_map(|(word, n)| count(n).map(|n| (word.clone(), n)))
                .collect();
            pairs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
            Ok(pairs)
        }
        Value::Null => Ok(Vec::new()),
        other => Err(ApiError::Decode(format!(
            "top_words must be a list or object, got {}",
            type_name(other)
        ))),
    }
}

fn contexts(value: &Value) -> Result<BTreeMap<String, Vec<String>>, ApiError> {
    match value {
        Value::Object(map) => Ok(map
            .iter()
            .map(|(word, sentences)| {
                let sentences = sentences
                    .as_array()
                    .map(|items| {
                        items
                            .iter()
                            .filter_map(|s| s.as_str().map(str::to_string))
                            .collect()
                    })
                    .unwrap_or_default();
                (word.clone(), sentences)
            })
            .collect()),
        Value::Null => Ok(BTreeMap::new()),
        other => Err(ApiError::Decode(format!(
            "word_context must be an object, got {}",
            type_name(other)
        ))),
    }
}

fn sentiment(value: &Value) -> Option<Sentiment> {
    let map = value.as_object()?;
    let polarity = map.get("polarity")?.as_f64()?;
    let subjectivity = map.get("subjectivity")?.as_f64()?;
    Some(Sentiment::new(polarity, subjectivity))
}

fn statistics(value: Option<&Value>, mut base: TextStatistics) -> TextStatistics {
    let Some(Value::Object(map)) = value else {
        return base;
    };
    let mut map: Map<String, Value> = map.clone();

    for (key, slot) in [
        ("total_words", &mut base.total_words),
        ("unique_words", &mut base.unique_words),
        ("text_length", &mut base.text_length),
    ] {
        if let Some(n) = map.remove(key).as_ref().and_then(count) {
            *slot = Some(n);
        }
    }
    base.extra.extend(map);
    base
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
