//! Clipboard support for exporting word cloud images.
//!
//! The image is written to the system clipboard as PNG using whichever
//! platform tool is present: `osascript` on macOS, `wl-copy` or `xclip` on
//! Linux.

pub mod copy;
mod error;
mod result;
pub mod tool;
pub mod tools;

pub use copy::Copy;
pub use error::{ClipboardError, MAX_IMAGE_SIZE};
pub use result::{CopyMethod, CopyResult};

/// Copy PNG bytes to the system clipboard with the platform's tools.
pub fn copy_image_to_clipboard(png: &[u8]) -> Result<CopyResult, ClipboardError> {
    Copy::new().image(png)
}
