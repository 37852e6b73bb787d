//! Compression configuration for a whole run.
//!
//! Settings are validated on construction and apply uniformly to every
//! file in the run, mirroring the single settings panel of the original
//! tool rather than per-file tuning.

use crate::constants::{
    DEFAULT_COMPRESSION_LEVEL, DEFAULT_MAX_DIMENSION, DEFAULT_MAX_SIZE_MB, DEFAULT_QUALITY,
    MAX_COMPRESSION_LEVEL, MAX_QUALITY, MIN_COMPRESSION_LEVEL,
};
use crate::error::{CompressionError, Result};
use image::ImageFormat;
use std::fmt;
use std::str::FromStr;

/// Supported output image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JPEG with lossy, quality-driven compression
    Jpeg,
    /// PNG with lossless compression plus an oxipng pass
    Png,
    /// WebP with lossless compression
    WebP,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "jpg",
            OutputFormat::Png => "png",
            OutputFormat::WebP => "webp",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "image/jpeg",
            OutputFormat::Png => "image/png",
            OutputFormat::WebP => "image/webp",
        }
    }

    pub fn to_image_format(&self) -> ImageFormat {
        match self {
            OutputFormat::Jpeg => ImageFormat::Jpeg,
            OutputFormat::Png => ImageFormat::Png,
            OutputFormat::WebP => ImageFormat::WebP,
        }
    }

    pub fn format_names() -> Vec<&'static str> {
        vec!["jpeg", "png", "webp"]
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Jpeg => "JPEG",
            OutputFormat::Png => "PNG",
            OutputFormat::WebP => "WebP",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for OutputFormat {
    type Err = CompressionError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "jpeg" | "jpg" => Ok(OutputFormat::Jpeg),
            "png" => Ok(OutputFormat::Png),
            "webp" => Ok(OutputFormat::WebP),
            _ => Err(CompressionError::UnsupportedFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CompressionSettings {
    /// Image quality in (0, 1].
    pub quality: f32,
    /// Target upper bound for re-encoded images, in megabytes.
    pub max_size_mb: f64,
    /// Output format for re-encoded images.
    pub output_format: OutputFormat,
    /// Deflate level (1-9) for the generic gzip pass.
    pub compression_level: u32,
    /// Longest image side after resizing, in pixels.
    pub max_dimension: u32,
}

impl CompressionSettings {
    pub fn new(
        quality: Option<f32>,
        max_size_mb: Option<f64>,
        output_format: Option<OutputFormat>,
        compression_level: Option<u32>,
        max_dimension: Option<u32>,
    ) -> Result<Self> {
        let quality = quality.unwrap_or(DEFAULT_QUALITY);
        if quality <= 0.0 || quality > MAX_QUALITY {
            return Err(CompressionError::InvalidQuality(quality));
        }

        let compression_level = compression_level.unwrap_or(DEFAULT_COMPRESSION_LEVEL);
        if !(MIN_COMPRESSION_LEVEL..=MAX_COMPRESSION_LEVEL).contains(&compression_level) {
            return Err(CompressionError::InvalidCompressionLevel(compression_level));
        }

        let max_dimension = max_dimension.unwrap_or(DEFAULT_MAX_DIMENSION);
        if max_dimension == 0 {
            return Err(CompressionError::InvalidDimension(max_dimension));
        }

        Ok(Self {
            quality,
            max_size_mb: max_size_mb.unwrap_or(DEFAULT_MAX_SIZE_MB),
            output_format: output_format.unwrap_or(OutputFormat::Jpeg),
            compression_level,
            max_dimension,
        })
    }

    /// Image quality mapped to the 1-100 scale the JPEG encoder expects.
    pub fn quality_percent(&self) -> u8 {
        (self.quality * 100.0).round().clamp(1.0, 100.0) as u8
    }

    /// Size target in bytes for re-encoded images.
    pub fn max_size_bytes(&self) -> u64 {
        (self.max_size_mb * 1024.0 * 1024.0) as u64
    }
}

impl Default for CompressionSettings {
    fn default() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
            max_size_mb: DEFAULT_MAX_SIZE_MB,
            output_format: OutputFormat::Jpeg,
            compression_level: DEFAULT_COMPRESSION_LEVEL,
            max_dimension: DEFAULT_MAX_DIMENSION,
        }
    }
}
