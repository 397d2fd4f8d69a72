//! Clipboard tool abstraction.

use super::result::CopyMethod;

/// Why a single tool could not copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyToolError {
    /// The tool binary is not installed.
    NotFound,
    /// The tool ran and failed.
    Failed(String),
}

/// A platform clipboard tool able to take a PNG image.
pub trait CopyTool: Send + Sync {
    fn method(&self) -> CopyMethod;

    fn name(&self) -> &'static str {
        self.method().name()
    }

    /// Whether the tool can run on this machine right now.
    fn is_available(&self) -> bool;

    fn try_copy_image(&self, png: &[u8]) -> Result<(), CopyToolError>;
}
