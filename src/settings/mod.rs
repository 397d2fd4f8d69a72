//! Generation settings: raw option values, their normalization, and the
//! option vocabularies the backend understands.

mod error;
mod normalize;
pub mod options;
mod types;

pub use error::NormalizeError;
pub use normalize::{is_hex_color, normalize, split_list, CUSTOM, DEFAULT_CUSTOM_BACKGROUND};
pub use options::{BackgroundPreset, ColorPalette, FontFamily, MaskShape};
pub use types::*;
