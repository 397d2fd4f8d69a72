//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::request::{DEFAULT_TAG, DEFAULT_TITLE};
use crate::settings::RawOptions;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend connection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Bounds generation, permalink and statistics calls
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    /// Bounds file and URL extraction calls
    #[serde(default = "default_upload_timeout")]
    pub upload_timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

pub fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

pub fn default_request_timeout() -> u64 {
    60
}

pub fn default_upload_timeout() -> u64 {
    120
}

pub fn default_user_agent() -> String {
    format!("wcgen/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
            upload_timeout_secs: default_upload_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    /// Timeout for generation and lookup calls.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Timeout for file and URL extraction.
    pub fn upload_timeout(&self) -> Duration {
        Duration::from_secs(self.upload_timeout_secs)
    }
}

/// Defaults applied to every generation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_tags")]
    pub tags: Vec<String>,
    /// Option values used beneath command-line flags
    #[serde(default)]
    pub defaults: RawOptions,
}

pub fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

pub fn default_tags() -> Vec<String> {
    vec![DEFAULT_TAG.to_string()]
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            tags: default_tags(),
            defaults: RawOptions::default(),
        }
    }
}

/// Where exported images land
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_export_directory")]
    pub directory: String,
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

pub fn default_export_directory() -> String {
    "~/Pictures/wordclouds".to_string()
}

pub fn default_file_name() -> String {
    crate::presenter::DOWNLOAD_FILE_NAME.to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_export_directory(),
            file_name: default_file_name(),
        }
    }
}

/// Log verbosity when no `--verbose` flag is given
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `error`, `warn`, `info`, `debug`, `trace`, or a full filter directive
    #[serde(default = "default_level")]
    pub level: String,
}

pub fn default_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}
