//! Linux X11 clipboard tool.

use crate::clipboard::result::CopyMethod;
use crate::clipboard::tool::{CopyTool, CopyToolError};

use super::{pipe_to, tool_exists};

/// X11 clipboard via `xclip`, targeting `image/png`.
pub struct Xclip;

impl Xclip {
    /// Create a new Xclip tool.
    pub fn new() -> Self {
        Self
    }

    pub const ARGS: [&'static str; 4] = ["-selection", "clipboard", "-t", "image/png"];
}

impl CopyTool for Xclip {
    fn method(&self) -> CopyMethod {
        CopyMethod::Xclip
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux") && tool_exists("xclip")
    }

    fn try_copy_image(&self, png: &[u8]) -> Result<(), CopyToolError> {
        pipe_to("xclip", &Self::ARGS, png)
    }
}

impl Default for Xclip {
    fn default() -> Self {
        Self::new()
    }
}
