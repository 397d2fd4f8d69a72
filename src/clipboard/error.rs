//! Clipboard operation errors.

/// Largest image accepted for a clipboard copy (50 MB).
pub const MAX_IMAGE_SIZE: u64 = 50 * 1024 * 1024;

/// Errors that can occur while copying an image to the clipboard.
///
/// None of these affect the artifact being exported.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("No clipboard tool available. On Linux, install wl-clipboard or xclip.")]
    NoToolAvailable,

    #[error("Image is empty; nothing to copy")]
    EmptyImage,

    #[error("Image too large for clipboard ({size_mb:.1} MB). Maximum is {max_mb} MB.")]
    ImageTooLarge { size_mb: f64, max_mb: u64 },

    #[error("All clipboard tools failed. Last error: {0}")]
    AllToolsFailed(String),

    #[error("Image could not be decoded: {0}")]
    InvalidImage(String),
}
