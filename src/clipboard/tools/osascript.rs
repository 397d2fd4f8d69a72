//! macOS AppleScript clipboard tool.

use std::io::Write;
use std::path::Path;
use std::process::Command;

use crate::clipboard::result::CopyMethod;
use crate::clipboard::tool::{CopyTool, CopyToolError};

/// Copies PNG images on macOS by staging them in a temp file and reading
/// that file into the clipboard as `«class PNGf»`.
pub struct OsaScript;

impl OsaScript {
    /// Create a new OsaScript tool.
    pub fn new() -> Self {
        Self
    }

    /// Escape a path for use in an AppleScript string literal.
    pub fn escape_path(path: &Path) -> String {
        path.display()
            .to_string()
            .replace('\\', "\\\\")
            .replace('"', "\\\"")
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    /// AppleScript that loads the PNG at `path` into the clipboard.
    pub fn build_image_script(path: &Path) -> String {
        format!(
            "set the clipboard to (read (POSIX file \"{}\") as «class PNGf»)",
            Self::escape_path(path)
        )
    }

    fn run_script(script: &str) -> Result<(), CopyToolError> {
        let output = Command::new("osascript")
            .args(["-e", script])
            .output()
            .map_err(|e| CopyToolError::Failed(e.to_string()))?;

        if output.status.success() {
            Ok(())
        } else {
            Err(CopyToolError::Failed(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ))
        }
    }
}

impl CopyTool for OsaScript {
    fn method(&self) -> CopyMethod {
        CopyMethod::OsaScript
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "macos")
    }

    fn try_copy_image(&self, png: &[u8]) -> Result<(), CopyToolError> {
        let mut staged = tempfile::Builder::new()
            .prefix("wcgen-")
            .suffix(".png")
            .tempfile()
            .map_err(|e| CopyToolError::Failed(e.to_string()))?;
        staged
            .write_all(png)
            .and_then(|_| staged.flush())
            .map_err(|e| CopyToolError::Failed(e.to_string()))?;

        Self::run_script(&Self::build_image_script(staged.path()))
    }
}

impl Default for OsaScript {
    fn default() -> Self {
        Self::new()
    }
}
