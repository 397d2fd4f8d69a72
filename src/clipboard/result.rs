//! Clipboard copy results.

use humansize::{format_size, BINARY};

/// The tool that performed a copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    OsaScript,
    WlCopy,
    Xclip,
}

impl CopyMethod {
    /// Executable name of the tool.
    pub fn name(&self) -> &'static str {
        match self {
            CopyMethod::OsaScript => "osascript",
            CopyMethod::WlCopy => "wl-copy",
            CopyMethod::Xclip => "xclip",
        }
    }
}

/// Outcome of a successful clipboard copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyResult {
    ImageCopied { tool: CopyMethod, size_bytes: usize },
}

impl CopyResult {
    /// Create a result for a successful image copy.
    pub fn image_copied(tool: CopyMethod, size_bytes: usize) -> Self {
        CopyResult::ImageCopied { tool, size_bytes }
    }

    /// Tool that performed the copy.
    pub fn tool(&self) -> CopyMethod {
        match self {
            CopyResult::ImageCopied { tool, .. } => *tool,
        }
    }

    /// User-facing confirmation, e.g. `Copied word-cloud.png to clipboard (12 KiB)`.
    pub fn message(&self, label: &str) -> String {
        match self {
            CopyResult::ImageCopied { size_bytes, .. } => format!(
                "Copied {} to clipboard ({})",
                label,
                format_size(*size_bytes, BINARY)
            ),
        }
    }
}
