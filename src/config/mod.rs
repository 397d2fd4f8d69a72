//! Configuration management for wcgen

mod io;
mod types;

pub use io::CONFIG_ENV;
pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::input::has_http_scheme;
use crate::settings::normalize;

impl Config {
    /// Get the config file path (`$WCGEN_CONFIG` or ~/.config/wcgen/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Get the config directory path (~/.config/wcgen)
    pub fn config_dir() -> Result<PathBuf> {
        io::config_dir()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        io::save(self)
    }

    /// Save to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        io::save_to(self, path)
    }

    /// Check values that would only fail later, at request time.
    pub fn validate(&self) -> Result<(), String> {
        if !has_http_scheme(self.api.base_url.trim()) {
            return Err(format!(
                "api.base_url must start with http:// or https:// (got '{}')",
                self.api.base_url
            ));
        }
        if self.api.request_timeout_secs == 0 {
            return Err("api.request_timeout_secs must be greater than 0".to_string());
        }
        if self.api.upload_timeout_secs == 0 {
            return Err("api.upload_timeout_secs must be greater than 0".to_string());
        }
        if self.export.file_name.trim().is_empty() {
            return Err("export.file_name must not be empty".to_string());
        }
        normalize(&self.generation.defaults)
            .map_err(|e| format!("generation.defaults: {}", e))?;
        Ok(())
    }

    /// Expand ~ in the export directory path
    pub fn export_directory(&self) -> PathBuf {
        let dir = &self.export.directory;
        if let Some(stripped) = dir.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        }
        PathBuf::from(dir)
    }
}
