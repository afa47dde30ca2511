// ABOUTME: Error types for the md2pptx builder
// ABOUTME: Separates recoverable per-slide failures from fatal document-level ones

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("Failed to read file: {0}")]
    FileReadError(#[from] std::io::Error),

    /// A slide unit could not be parsed. Recovered inside the parser.
    #[error("Markdown parse error: {0}")]
    ParseError(String),

    /// A single list item produced no usable text. Recovered inside the renderer.
    #[error("List item extraction error: {0}")]
    ItemExtractionError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// One visual element could not be placed on a slide.
    #[error("Failed to place {element}: {message}")]
    AssemblyError { element: String, message: String },

    #[error("Image error: {0}")]
    ImageError(String),

    #[error("PPTX generation error: {0}")]
    PptxError(String),

    #[error("Input validation error: {0}")]
    ValidationError(String),

    #[error("Path not found: {0}")]
    PathNotFoundError(PathBuf),

    #[error("Unknown error: {0}")]
    UnknownError(String),
}

impl From<anyhow::Error> for DeckError {
    fn from(err: anyhow::Error) -> Self {
        DeckError::UnknownError(err.to_string())
    }
}

impl From<zip::result::ZipError> for DeckError {
    fn from(err: zip::result::ZipError) -> Self {
        DeckError::PptxError(format!("ZIP operation failed: {}", err))
    }
}

impl From<image::ImageError> for DeckError {
    fn from(err: image::ImageError) -> Self {
        DeckError::ImageError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DeckError>;
