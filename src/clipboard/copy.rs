//! Copy orchestrator for clipboard operations.

use tracing::{debug, warn};

use super::error::{ClipboardError, MAX_IMAGE_SIZE};
use super::result::CopyResult;
use super::tool::{CopyTool, CopyToolError};
use super::tools::platform_tools;

/// Tries each available tool in priority order until one takes the image.
pub struct Copy {
    tools: Vec<Box<dyn CopyTool>>,
}

impl Copy {
    /// Create with platform-appropriate tools.
    pub fn new() -> Self {
        Self {
            tools: platform_tools(),
        }
    }

    /// Create with specific tools (for testing).
    pub fn with_tools(tools: Vec<Box<dyn CopyTool>>) -> Self {
        Self { tools }
    }

    /// Get a reference to the tools list.
    pub fn tools(&self) -> &[Box<dyn CopyTool>] {
        &self.tools
    }

    /// Copy PNG bytes to the clipboard as an image.
    pub fn image(&self, png: &[u8]) -> Result<CopyResult, ClipboardError> {
        if png.is_empty() {
            return Err(ClipboardError::EmptyImage);
        }
        let size = png.len() as u64;
        if size > MAX_IMAGE_SIZE {
            return Err(ClipboardError::ImageTooLarge {
                size_mb: size as f64 / (1024.0 * 1024.0),
                max_mb: MAX_IMAGE_SIZE / (1024 * 1024),
            });
        }

        let mut last_error: Option<String> = None;
        for tool in self.tools.iter().filter(|t| t.is_available()) {
            match tool.try_copy_image(png) {
                Ok(()) => {
                    debug!(tool = tool.name(), bytes = png.len(), "image copied");
                    return Ok(CopyResult::image_copied(tool.method(), png.len()));
                }
                Err(CopyToolError::NotFound) => continue,
                Err(CopyToolError::Failed(msg)) => {
                    warn!("clipboard: {} failed ({}), trying next tool", tool.name(), msg);
                    last_error = Some(msg);
                }
            }
        }

        match last_error {
            Some(err) => Err(ClipboardError::AllToolsFailed(err)),
            None => Err(ClipboardError::NoToolAvailable),
        }
    }
}

impl Default for Copy {
    fn default() -> Self {
        Self::new()
    }
}
