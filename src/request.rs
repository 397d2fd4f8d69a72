//! Generation requests

use crate::input::{InputError, MIN_TEXT_CHARS};
use crate::settings::Settings;

pub const DEFAULT_TITLE: &str = "Generated Word Cloud";
pub const DEFAULT_TAG: &str = "generated";

/// Text plus settings for one generation. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    text: String,
    settings: Settings,
    title: String,
    tags: Vec<String>,
}

impl GenerationRequest {
    /// Build a request from already-ingested text.
    ///
    /// The text is trimmed and must keep at least [`MIN_TEXT_CHARS`] characters.
    pub fn new(text: &str, settings: Settings) -> Result<Self, InputError> {
        let text = text.trim();
        let actual = text.chars().count();
        if actual < MIN_TEXT_CHARS {
            return Err(InputError::InsufficientText {
                min: MIN_TEXT_CHARS,
                actual,
            });
        }
        Ok(Self {
            text: text.to_string(),
            settings,
            title: DEFAULT_TITLE.to_string(),
            tags: vec![DEFAULT_TAG.to_string()],
        })
    }

    /// Replace the title stored with the artifact.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Replace the tags stored with the artifact.
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Trimmed text to render.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Normalized generation settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Title stored with the artifact.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Tags stored with the artifact.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}
