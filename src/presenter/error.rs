//! Export errors.

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Artifact has no image")]
    NoImage,

    #[error("Image data is not valid base64: {0}")]
    InvalidImage(String),

    #[error("Failed to write export: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to build CSV: {0}")]
    Csv(#[from] csv::Error),
}
