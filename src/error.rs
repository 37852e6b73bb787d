use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompressionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    ImageProcessing(#[from] image::ImageError),

    #[error("PNG optimization error: {0}")]
    PngOptimization(String),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Invalid quality value: {0}. Must be greater than 0 and at most 1")]
    InvalidQuality(f32),

    #[error("Invalid compression level: {0}. Must be between 1 and 9")]
    InvalidCompressionLevel(u32),

    #[error("Invalid maximum dimension: {0}. Must be greater than 0")]
    InvalidDimension(u32),

    #[error("File too large: {0} bytes. Maximum allowed: {1} bytes")]
    FileTooLarge(u64, u64),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to create output directory: {0}")]
    DirectoryCreationFailed(PathBuf),

    #[error("No input files found: {0}")]
    NoInputFilesFound(String),

    #[error("Walkdir error: {0}")]
    WalkdirError(#[from] walkdir::Error),

    #[error("Background task failed: {0}")]
    TaskJoin(String),

    #[error("Nothing to bundle: no files were compressed successfully")]
    EmptyBundle,
}

pub type Result<T> = std::result::Result<T, CompressionError>;
