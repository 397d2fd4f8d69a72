//! Settings normalization errors.

/// Reasons a set of raw options cannot become [`Settings`](super::Settings).
///
/// Every variant is a local validation failure: nothing has been sent yet.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NormalizeError {
    #[error("Invalid number for {field}: '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Unknown {field} '{value}'")]
    UnknownOption { field: &'static str, value: String },

    #[error("Invalid color for {field}: '{value}' (expected #rgb or #rrggbb)")]
    InvalidColor { field: &'static str, value: String },

    #[error("{min_field} ({min}) must not exceed {max_field} ({max})")]
    InvertedRange {
        min_field: &'static str,
        max_field: &'static str,
        min: u32,
        max: u32,
    },
}

impl NormalizeError {
    /// Name of the offending option.
    pub fn field(&self) -> &'static str {
        match self {
            NormalizeError::InvalidNumber { field, .. }
            | NormalizeError::UnknownOption { field, .. }
            | NormalizeError::InvalidColor { field, .. } => field,
            NormalizeError::InvertedRange { min_field, .. } => min_field,
        }
    }
}
