//! Linux Wayland clipboard tool.

use crate::clipboard::result::CopyMethod;
use crate::clipboard::tool::{CopyTool, CopyToolError};

use super::{pipe_to, tool_exists};

/// Wayland clipboard via `wl-copy` from wl-clipboard.
pub struct WlCopy;

impl WlCopy {
    /// Create a new WlCopy tool.
    pub fn new() -> Self {
        Self
    }
}

impl CopyTool for WlCopy {
    fn method(&self) -> CopyMethod {
        CopyMethod::WlCopy
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux")
            && std::env::var_os("WAYLAND_DISPLAY").is_some()
            && tool_exists("wl-copy")
    }

    fn try_copy_image(&self, png: &[u8]) -> Result<(), CopyToolError> {
        pipe_to("wl-copy", &["--type", "image/png"], png)
    }
}

impl Default for WlCopy {
    fn default() -> Self {
        Self::new()
    }
}
